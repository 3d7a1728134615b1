// src/handlers/experts.rs

use axum::{Json, extract::State};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AuthenticatedAccount, require_role},
    models::account::AccountRole,
    models::expert::{ExpertProfileResponse, UpdateExpertProfilePayload},
};

#[utoipa::path(
    get,
    path = "/api/experts/me",
    responses(
        (status = 200, description = "Perfil do especialista", body = ExpertProfileResponse),
        (status = 403, description = "Conta não é de especialista")
    ),
    security(("api_jwt" = [])),
    tag = "Experts"
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthenticatedAccount(account): AuthenticatedAccount,
) -> Result<Json<ExpertProfileResponse>, AppError> {
    require_role(&account, AccountRole::Expert)?;

    let profile = app_state.expert_service.get_profile(&account).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    path = "/api/experts/me",
    request_body = UpdateExpertProfilePayload,
    responses(
        (status = 200, description = "Perfil atualizado", body = ExpertProfileResponse),
        (status = 400, description = "Falhas de validação: lista de {field, errorCode}"),
        (status = 403, description = "Conta não é de especialista")
    ),
    security(("api_jwt" = [])),
    tag = "Experts"
)]
pub async fn update_me(
    State(app_state): State<AppState>,
    AuthenticatedAccount(account): AuthenticatedAccount,
    Json(payload): Json<UpdateExpertProfilePayload>,
) -> Result<Json<ExpertProfileResponse>, AppError> {
    require_role(&account, AccountRole::Expert)?;

    let profile = app_state
        .expert_service
        .update_profile(&account, payload)
        .await?;
    Ok(Json(profile))
}
