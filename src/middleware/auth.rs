// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::account::{Account, AccountRole},
};

// O middleware em si: valida o Bearer token e pendura a conta nos
// "extensions" da requisição.
pub async fn auth_guard(
    State(app_state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let headers = request.headers();
    let auth_header = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok());

    if let Some(auth_header) = auth_header {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            let account = app_state.auth_service.validate_token(token).await?;

            request.extensions_mut().insert(account);
            return Ok(next.run(request).await);
        }
    }

    Err(AppError::InvalidToken)
}

// Extrator para obter a conta autenticada diretamente nos handlers
pub struct AuthenticatedAccount(pub Account);

impl<S> FromRequestParts<S> for AuthenticatedAccount
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Account>()
            .cloned()
            .map(AuthenticatedAccount)
            .ok_or(AppError::InvalidToken)
    }
}

// As rotas de perfil são por papel: conta de dealer em rota de customer
// é 403, não 404.
pub fn require_role(account: &Account, role: AccountRole) -> Result<(), AppError> {
    if account.role == role {
        Ok(())
    } else {
        Err(AppError::RoleMismatch)
    }
}
