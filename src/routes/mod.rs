//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router:
/// - WebSocket at `/ws` (mirrors the HTTP operations, plus chat supersede)
/// - JSON API under `/api/v1/...`
/// - Static SPA from `./static` with index fallback
/// - CORS wide open (single-user demo; tighten before exposing publicly)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    // Static files with SPA fallback
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/chat/busy", get(http::http_chat_busy))
        .route("/api/v1/assess/questions", get(http::http_assess_questions))
        .route("/api/v1/review", post(http::http_post_review))
        .route("/api/v1/explain", post(http::http_post_explain))
        .route("/api/v1/challenges", post(http::http_post_challenges))
        .route("/api/v1/learning_path", post(http::http_post_learning_path))
        .route("/api/v1/study_plan", post(http::http_post_study_plan))
        .route("/api/v1/validate", post(http::http_post_validate))
        .route("/api/v1/debug", post(http::http_post_debug))
        .route("/api/v1/assess", post(http::http_post_assess))
        .route("/api/v1/chat", post(http::http_post_chat))
        .route("/api/v1/run", post(http::http_post_run))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}
