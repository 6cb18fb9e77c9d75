use axum::{extract::State, Json};
use std::sync::Arc;

use super::{GenerateResponse, HealthResponse, SuggestResponse, SuggestionRequest, TripRequest};
use crate::api::routes::AppState;
use crate::error::AppError;

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TripRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    // Validate input
    if request.location.trim().is_empty() {
        return Err(AppError::BadRequest("Location cannot be empty".into()));
    }

    let response = state.narrator.generate(&request).await?;
    Ok(Json(response))
}

pub async fn suggest(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SuggestionRequest>,
) -> Json<SuggestResponse> {
    if request.location.trim().is_empty() {
        return Json(SuggestResponse {
            suggestions: Vec::new(),
        });
    }

    let suggestions = state.narrator.suggest(&request.location).await;
    Json(SuggestResponse { suggestions })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
