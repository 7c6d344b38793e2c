use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness check
///
/// Reports whether the external services are configured; both are optional.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let collections = state.command.store.read().await;

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "ranking": state.config.ranking.enabled(),
            "extraction": state.config.extraction.enabled(),
            "shoppingItems": collections.shopping.len(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
