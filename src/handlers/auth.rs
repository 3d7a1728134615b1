// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedAccount,
    models::account::{
        Account, AuthResponse, ChangePasswordPayload, CustomerRegistrationPayload,
        DealerRegistrationPayload, ExpertRegistrationPayload, LoginPayload, RegistrationRequest,
    },
};

// Cada rota de cadastro resolve o papel aqui na borda e entrega ao
// serviço uma variante de RegistrationRequest.

#[utoipa::path(
    post,
    path = "/api/auth/register/customer",
    request_body = CustomerRegistrationPayload,
    responses(
        (status = 200, description = "Conta de cliente criada", body = AuthResponse),
        (status = 400, description = "Campos inválidos"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    tag = "Auth"
)]
pub async fn register_customer(
    State(app_state): State<AppState>,
    Json(payload): Json<CustomerRegistrationPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .register(RegistrationRequest::Customer(payload))
        .await?;

    Ok(Json(AuthResponse { token }))
}

#[utoipa::path(
    post,
    path = "/api/auth/register/dealer",
    request_body = DealerRegistrationPayload,
    responses(
        (status = 200, description = "Conta de lojista criada", body = AuthResponse),
        (status = 400, description = "Campos inválidos"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    tag = "Auth"
)]
pub async fn register_dealer(
    State(app_state): State<AppState>,
    Json(payload): Json<DealerRegistrationPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .register(RegistrationRequest::Dealer(payload))
        .await?;

    Ok(Json(AuthResponse { token }))
}

#[utoipa::path(
    post,
    path = "/api/auth/register/expert",
    request_body = ExpertRegistrationPayload,
    responses(
        (status = 200, description = "Conta de especialista criada", body = AuthResponse),
        (status = 400, description = "Campos inválidos"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    tag = "Auth"
)]
pub async fn register_expert(
    State(app_state): State<AppState>,
    Json(payload): Json<ExpertRegistrationPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .register(RegistrationRequest::Expert(payload))
        .await?;

    Ok(Json(AuthResponse { token }))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login efetuado", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

#[utoipa::path(
    post,
    path = "/api/auth/password",
    request_body = ChangePasswordPayload,
    responses(
        (status = 204, description = "Senha alterada"),
        (status = 400, description = "Nova senha igual à atual"),
        (status = 401, description = "Senha atual incorreta")
    ),
    security(("api_jwt" = [])),
    tag = "Auth"
)]
pub async fn change_password(
    State(app_state): State<AppState>,
    AuthenticatedAccount(account): AuthenticatedAccount,
    Json(payload): Json<ChangePasswordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    app_state
        .auth_service
        .change_password(&account, &payload.current_password, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Conta autenticada", body = Account),
        (status = 401, description = "Token inválido ou ausente")
    ),
    security(("api_jwt" = [])),
    tag = "Auth"
)]
pub async fn get_me(AuthenticatedAccount(account): AuthenticatedAccount) -> Json<Account> {
    Json(account)
}
