//! HTTP health side-channel.
//!
//! A small axum app that runs next to the MCP transport so hosting platforms
//! can probe liveness. It never touches the tool layer.

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::clock::Clock;
use super::config::Config;

/// Values reported by the health endpoints.
#[derive(Clone)]
pub struct HealthState {
    service: String,
    display_name: String,
    version: String,
    clock: Arc<dyn Clock>,
}

impl HealthState {
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            service: config.server.name.clone(),
            display_name: config.server.display_name.clone(),
            version: config.server.version.clone(),
            clock,
        }
    }
}

/// Build the health router with permissive CORS.
pub fn router(state: HealthState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/healthz", get(healthz).options(preflight))
        .route("/", get(root).options(preflight))
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve the health router in a background task.
///
/// Returns `None` when disabled. A bind failure is logged and ends the task;
/// the MCP transport keeps running either way.
pub fn spawn(config: &Config, clock: Arc<dyn Clock>) -> Option<JoinHandle<()>> {
    if !config.health.enabled {
        info!("Health side-channel disabled");
        return None;
    }

    let addr = format!("{}:{}", config.health.host, config.health.port);
    let app = router(HealthState::new(config, clock));

    Some(tokio::spawn(async move {
        let listener = match tokio::net::TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("HTTP health server failed to bind {}: {}", addr, e);
                return;
            }
        };
        info!("HTTP listening on {}", addr);

        if let Err(e) = axum::serve(listener, app).await {
            error!("HTTP health server error: {}", e);
        }
    }))
}

async fn healthz(State(state): State<HealthState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": state.clock.now_utc(),
        "service": state.service,
        "version": state.version,
    }))
}

async fn root(State(state): State<HealthState>) -> impl IntoResponse {
    Json(json!({
        "service": state.display_name,
        "version": state.version,
        "status": "running",
        "timestamp": state.clock.now_utc(),
        "endpoints": {
            "health": "/healthz",
            "mcp": "stdio transport only",
        },
    }))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn not_found(State(state): State<HealthState>, method: Method, uri: Uri) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "path": uri.path(),
            "timestamp": state.clock.now_utc(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use chrono::TimeZone;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let clock = FixedClock::new(chrono::Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap());
        router(HealthState::new(&Config::default(), Arc::new(clock)))
    }

    async fn send(method: Method, path: &str) -> (StatusCode, Response) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        (response.status(), response)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_healthz() {
        let (status, response) = send(Method::GET, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "status": "healthy",
                "timestamp": "2025-08-01T09:00:00.000Z",
                "service": "samsung-logistics-mcp",
                "version": env!("CARGO_PKG_VERSION"),
            })
        );
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let (status, response) = send(Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["service"], json!("Samsung Logistics MCP Server"));
        assert_eq!(body["status"], json!("running"));
        assert_eq!(body["endpoints"]["health"], json!("/healthz"));
        assert_eq!(body["endpoints"]["mcp"], json!("stdio transport only"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, response) = send(Method::GET, "/metrics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], json!("Not Found"));
        assert_eq!(body["path"], json!("/metrics"));
    }

    #[tokio::test]
    async fn test_options_is_ok() {
        let (status, _) = send(Method::OPTIONS, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(Method::OPTIONS, "/anything").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_header_present() {
        let request = Request::builder()
            .uri("/healthz")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
