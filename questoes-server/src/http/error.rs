//! API error types with IntoResponse
//!
//! Closed set of failures, each mapped to one status code and JSON shape:
//! validation (400), not found (404), oversized body (413), store (500).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

pub const NOT_FOUND_MESSAGE: &str = "Questão não encontrada";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed presence checks or could not be decoded (400)
    Validation(ValidationError),

    /// No question matches the requested id (404)
    NotFound { id: String },

    /// Request body exceeds the configured limit (413)
    PayloadTooLarge { reason: String },

    /// Database failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => {
                if let ValidationError::MissingFields { fields } = e {
                    tracing::debug!(?fields, "rejected question payload");
                }
                json!({
                    "erro": "Dados inválidos",
                    "mensagem": e.to_string()
                })
            }
            Self::NotFound { id } => {
                tracing::debug!(%id, "question not found");
                json!({ "mensagem": NOT_FOUND_MESSAGE })
            }
            Self::PayloadTooLarge { reason } => json!({
                "erro": "Corpo da requisição muito grande",
                "mensagem": reason
            }),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                json!({
                    "erro": "Erro interno do servidor",
                    "mensagem": "Não foi possível concluir a operação no banco de dados"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
