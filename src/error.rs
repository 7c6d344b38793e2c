use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

/// JSON error returned by every API route.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] larder_shared::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            larder_shared::Error::Validate(errors) => {
                let details: HashMap<String, String> = errors
                    .field_errors()
                    .iter()
                    .map(|(field, errors)| {
                        let message = errors
                            .first()
                            .and_then(|e| e.message.as_ref())
                            .map(|m| m.to_string())
                            .or_else(|| errors.first().map(|e| e.code.to_string()))
                            .unwrap_or_else(|| "invalid".to_string());
                        (field.to_string(), message)
                    })
                    .collect();

                tracing::debug!(errors = ?details, "request validation failed");

                let body = serde_json::json!({
                    "error": "ValidationFailed",
                    "message": "Invalid input provided.",
                    "details": details,
                });

                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            larder_shared::Error::User(message) => {
                tracing::debug!(%message, "request rejected");

                let body = serde_json::json!({
                    "error": "BadRequest",
                    "message": message,
                });

                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            larder_shared::Error::NotFound(message) => {
                let body = serde_json::json!({
                    "error": "NotFound",
                    "message": format!("{message} not found"),
                });

                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            e @ (larder_shared::Error::Server(_) | larder_shared::Error::Unknown(_)) => {
                tracing::error!(error = %e, "Internal server error");

                let body = serde_json::json!({
                    "error": "InternalServerError",
                    "message": "Something went wrong. Please try again later.",
                });

                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
