pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    pub location: String,
    #[serde(default)]
    pub headed_towards: Option<String>,
    #[serde(default)]
    pub travel_mode: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub script: String,
    pub audio_url: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
