use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::narrator::Narrator;

pub struct AppState {
    pub narrator: Narrator,
}

pub fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/generate", post(handlers::generate))
        .route("/suggest", post(handlers::suggest))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
