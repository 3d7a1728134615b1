// src/handlers/dealers.rs

use axum::{Json, extract::State};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AuthenticatedAccount, require_role},
    models::account::AccountRole,
    models::dealer::{DealerProfileResponse, UpdateDealerProfilePayload},
};

#[utoipa::path(
    get,
    path = "/api/dealers/me",
    responses(
        (status = 200, description = "Perfil da empresa", body = DealerProfileResponse),
        (status = 403, description = "Conta não é de lojista")
    ),
    security(("api_jwt" = [])),
    tag = "Dealers"
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthenticatedAccount(account): AuthenticatedAccount,
) -> Result<Json<DealerProfileResponse>, AppError> {
    require_role(&account, AccountRole::Dealer)?;

    let profile = app_state.dealer_service.get_profile(&account).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    path = "/api/dealers/me",
    request_body = UpdateDealerProfilePayload,
    responses(
        (status = 200, description = "Perfil atualizado", body = DealerProfileResponse),
        (status = 400, description = "Falhas de validação ou ano de início fora da faixa"),
        (status = 403, description = "Conta não é de lojista")
    ),
    security(("api_jwt" = [])),
    tag = "Dealers"
)]
pub async fn update_me(
    State(app_state): State<AppState>,
    AuthenticatedAccount(account): AuthenticatedAccount,
    Json(payload): Json<UpdateDealerProfilePayload>,
) -> Result<Json<DealerProfileResponse>, AppError> {
    require_role(&account, AccountRole::Dealer)?;

    let profile = app_state
        .dealer_service
        .update_profile(&account, payload)
        .await?;
    Ok(Json(profile))
}
