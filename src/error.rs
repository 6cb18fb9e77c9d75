use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Why a call to a hosted provider failed.
#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    #[error("no API key configured (set OPENAI_API_KEY)")]
    MissingApiKey,

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else if e.is_decode() {
            UpstreamError::Malformed(e.to_string())
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Script generation failed: {0}")]
    Generation(UpstreamError),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(UpstreamError),

    #[error("Suggestions were not a JSON array of strings: {0}")]
    SuggestionParse(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Generation(UpstreamError::Timeout) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_TIMEOUT")
            }
            AppError::Generation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_ERROR"),
            AppError::Synthesis(UpstreamError::Timeout) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "SYNTHESIS_TIMEOUT")
            }
            AppError::Synthesis(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SYNTHESIS_ERROR"),
            AppError::SuggestionParse(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "SUGGESTION_PARSE_ERROR")
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        };
        let message = self.to_string();

        tracing::error!("Request failed: {} - {}", code, message);

        (
            status,
            Json(ErrorResponse {
                detail: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}
