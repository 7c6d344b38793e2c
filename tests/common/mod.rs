use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{Method, StatusCode, header},
};
use http_body_util::BodyExt;
use larder::config::{Config, ObservabilityConfig, ServerConfig, ServiceConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Config with both external services disabled.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        observability: ObservabilityConfig::default(),
        ranking: ServiceConfig::default(),
        extraction: ServiceConfig::default(),
    }
}

pub fn setup_app() -> Router {
    larder::create_app(test_config()).unwrap()
}

/// Send a request and decode the JSON response body (`Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
