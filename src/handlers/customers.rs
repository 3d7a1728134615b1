// src/handlers/customers.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AuthenticatedAccount, require_role},
    models::account::AccountRole,
    models::customer::{CustomerProfileResponse, UpdateCustomerProfilePayload},
};

#[utoipa::path(
    get,
    path = "/api/customers/me",
    responses(
        (status = 200, description = "Perfil do cliente", body = CustomerProfileResponse),
        (status = 403, description = "Conta não é de cliente"),
        (status = 404, description = "Perfil não encontrado ou deletado")
    ),
    security(("api_jwt" = [])),
    tag = "Customers"
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthenticatedAccount(account): AuthenticatedAccount,
) -> Result<Json<CustomerProfileResponse>, AppError> {
    require_role(&account, AccountRole::Customer)?;

    let profile = app_state.customer_service.get_profile(&account).await?;
    Ok(Json(profile))
}

// Update gated por etapa: o corpo declara a etapa alvo em `onboardingStep`
// e o conjunto de regras correspondente decide o que é obrigatório.
#[utoipa::path(
    put,
    path = "/api/customers/me",
    request_body = UpdateCustomerProfilePayload,
    responses(
        (status = 200, description = "Perfil atualizado", body = CustomerProfileResponse),
        (status = 400, description = "Falhas de validação: lista de {field, errorCode}"),
        (status = 403, description = "Conta não é de cliente")
    ),
    security(("api_jwt" = [])),
    tag = "Customers"
)]
pub async fn update_me(
    State(app_state): State<AppState>,
    AuthenticatedAccount(account): AuthenticatedAccount,
    Json(payload): Json<UpdateCustomerProfilePayload>,
) -> Result<Json<CustomerProfileResponse>, AppError> {
    require_role(&account, AccountRole::Customer)?;

    let profile = app_state
        .customer_service
        .update_profile(&account, payload)
        .await?;
    Ok(Json(profile))
}

#[utoipa::path(
    delete,
    path = "/api/customers/me",
    responses(
        (status = 204, description = "Perfil soft-deletado"),
        (status = 403, description = "Conta não é de cliente")
    ),
    security(("api_jwt" = [])),
    tag = "Customers"
)]
pub async fn delete_me(
    State(app_state): State<AppState>,
    AuthenticatedAccount(account): AuthenticatedAccount,
) -> Result<impl IntoResponse, AppError> {
    require_role(&account, AccountRole::Customer)?;

    app_state.customer_service.soft_delete(&account).await?;
    Ok(StatusCode::NO_CONTENT)
}
