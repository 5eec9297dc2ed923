// Web server: Axum-based scoring endpoint.
//
// One JSON route (POST /predict) plus a liveness probe. CORS is open to any
// origin.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::scoring::risk::RiskRules;

pub mod error;
pub mod handlers;
pub mod journal;

use journal::PredictionJournal;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub rules: Arc<RiskRules>,
    pub journal: Arc<dyn PredictionJournal>,
}

impl AppState {
    pub fn new(config: Config, journal: Arc<dyn PredictionJournal>) -> Self {
        Self {
            config: Arc::new(config),
            rules: Arc::new(RiskRules::default()),
            journal,
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(state: AppState) -> Result<()> {
    let addr = format!("{}:{}", state.config.bind, state.config.port);
    let app = build_router(state);

    info!("PCOS risk service listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("PCOS risk service stopped");
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict::predict))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(tower_http::cors::Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe, always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
