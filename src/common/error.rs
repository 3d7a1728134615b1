// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::models::onboarding::FieldError;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    // Regras de formato dos payloads de cadastro/login (crate validator)
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Falhas da engine de validação de perfil: lista completa de
    // (campo, código), nunca só a primeira.
    #[error("Perfil inválido")]
    ProfileValidation(Vec<FieldError>),

    // Violação de regra de negócio do ano de início; a mensagem enumera
    // o intervalo válido (ex: "2000-2026 or Before 2000").
    #[error("Ano de início inválido: {0}")]
    InvalidStartYear(String),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Papel da conta não corresponde à rota")]
    RoleMismatch,

    #[error("Conta não encontrada")]
    AccountNotFound,

    // O serviço de catálogo falhou. Nunca chega à borda a partir da
    // validação (política fail-open); fica para quem chamar direto.
    #[error("Serviço de catálogo indisponível: {0}")]
    CatalogUnavailable(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação de formato.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            // Falhas da engine: details é a lista [{field, errorCode}].
            AppError::ProfileValidation(field_errors) => {
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": field_errors,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::InvalidStartYear(message) => {
                let body = Json(json!({
                    "error": "InvalidStartYear",
                    "message": message,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "Este e-mail já está em uso."),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos."),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.",
            ),
            AppError::RoleMismatch => (
                StatusCode::FORBIDDEN,
                "Esta rota não pertence ao papel da sua conta.",
            ),
            AppError::AccountNotFound => (StatusCode::NOT_FOUND, "Conta não encontrada."),

            // Todos os outros erros (DatabaseError, CatalogUnavailable,
            // InternalServerError) viram 500. O `tracing` loga a mensagem
            // detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.",
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::onboarding::ValidationCode;

    #[test]
    fn test_profile_validation_keeps_every_field_error() {
        let err = AppError::ProfileValidation(vec![
            FieldError::new("poolType", ValidationCode::FieldRequired),
            FieldError::new("skills", ValidationCode::InvalidSkillCode),
        ]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_email_conflict_maps_to_409() {
        let response = AppError::EmailAlreadyExists.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_role_mismatch_maps_to_403() {
        let response = AppError::RoleMismatch.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
