// src/common/error.rs

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Corpo que nem chegou a virar o payload (JSON quebrado, tipo errado, campo faltando)
    #[error("Corpo da requisição inválido: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("{0} não encontrado")]
    NotFound(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }

            // O axum já sabe responder (400, 415 ou 422), deixamos com ele.
            AppError::InvalidJson(rejection) => rejection.into_response(),

            // 404 sem corpo, igual para todos os recursos
            AppError::NotFound(resource) => {
                tracing::debug!("{} não encontrado", resource);
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "invalid_email"))]
        email: String,
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = AppError::NotFound("User").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn validation_error_lists_field_messages() {
        let errors = Probe { email: "nope".into() }.validate().unwrap_err();
        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["details"]["email"][0], "invalid_email");
    }
}
