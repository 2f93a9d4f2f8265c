// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Filtro inválido: {0}")]
    InvalidFilter(String),

    #[error("Nota vazia")]
    EmptyNote,

    #[error("Lead não encontrado: {0}")]
    LeadNotFound(String),

    #[error("Notificação não encontrada: {0}")]
    NotificationNotFound(Uuid),

    // Qualquer outro erro inesperado. O `anyhow` guarda o contexto.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| match &e.message {
                            Some(m) => m.to_string(),
                            None => e.code.to_string(),
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidFilter(ref value) => {
                let body = Json(json!({ "error": format!("Invalid filter value: {value}") }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmptyNote => (StatusCode::BAD_REQUEST, "Note cannot be empty."),
            AppError::LeadNotFound(ref id) => {
                let body = Json(json!({ "error": format!("Lead {id} not found.") }));
                return (StatusCode::NOT_FOUND, body).into_response();
            }
            AppError::NotificationNotFound(_) => {
                (StatusCode::NOT_FOUND, "Notification not found.")
            }

            // O resto vira 500, e o `tracing` loga a mensagem detalhada.
            ref e @ AppError::InternalServerError(_) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
