use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::domain::error::{DomainError, FieldErrors};
use crate::domain::post::required_message;
use crate::presentation::renderer::RenderError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    errors: FieldErrors,
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors {
                let message = err
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| required_message(&field));
                fields.add(field.to_string(), message);
            }
        }
        fields
    }
}

fn validation_response(errors: FieldErrors) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationBody { errors }),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Domain(DomainError::Validation(errors)) => {
                return validation_response(errors);
            }
            AppError::Validation(errors) => return validation_response(errors.into()),
            AppError::Domain(err @ DomainError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Domain(err @ DomainError::Unexpected(_)) => {
                error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Render(err) => {
                error!(error = ?err, "page render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
            AppError::Internal(err) => {
                error!(error = ?err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::{Value, json};
    use validator::{ValidationError, ValidationErrors};

    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        serde_json::from_slice(&bytes).expect("body must be json")
    }

    #[tokio::test]
    async fn domain_validation_maps_to_422_with_field_map() {
        let mut errors = FieldErrors::new();
        errors.add("title", "The title field is required.");

        let response = AppError::from(DomainError::Validation(errors)).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({"errors": {"title": ["The title field is required."]}})
        );
    }

    #[tokio::test]
    async fn validator_errors_use_the_same_shape() {
        let mut errors = ValidationErrors::new();
        errors.add("content", ValidationError::new("length"));

        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({"errors": {"content": ["The content field is required."]}})
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response =
            AppError::from(DomainError::NotFound("post id: 3".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "resource not found: post id: 3"})
        );
    }

    #[tokio::test]
    async fn unexpected_errors_do_not_leak_details() {
        let response = AppError::from(DomainError::Unexpected("connection reset".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "internal error"}));
    }
}
