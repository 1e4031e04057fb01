//! shotqa Web Server
//!
//! Axum-based server for the analysis API and the upload page.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use shotqa_core::VisionRelay;
use state::AppState;

/// Path of the analysis endpoint.
pub const ANALYZE_PATH: &str = "/api/gemini/analyze-image";

/// Default request body limit. Screenshots arrive base64-encoded inside JSON.
pub const DEFAULT_BODY_LIMIT: usize = 20 * 1024 * 1024;

/// Listener and request limits.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

/// Create the application router.
pub fn create_router(state: AppState, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/health", get(routes::health::health))
        .route(ANALYZE_PATH, post(routes::analyze::analyze_image))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(relay: Arc<dyn VisionRelay>, config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(relay);
    let app = create_router(state, config.body_limit);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
