use base64::{engine::general_purpose::STANDARD, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::AppError;

pub const AUDIO_DATA_URI_PREFIX: &str = "data:audio/mp3;base64,";

lazy_static! {
    // Models like to wrap JSON in ```json ... ``` even when told not to.
    static ref FENCE_REGEX: Regex =
        Regex::new(r"(?s)^\s*```[A-Za-z]*\s*\n(.*?)\n?\s*```\s*$").unwrap();
}

/// Encode a whole audio buffer as a browser-playable data URI.
pub fn audio_data_uri(audio: &[u8]) -> String {
    let mut uri = String::with_capacity(AUDIO_DATA_URI_PREFIX.len() + audio.len().div_ceil(3) * 4);
    uri.push_str(AUDIO_DATA_URI_PREFIX);
    STANDARD.encode_string(audio, &mut uri);
    uri
}

/// Parse a model reply as a JSON array of strings.
pub fn parse_suggestions(reply: &str) -> Result<Vec<String>, AppError> {
    let body = FENCE_REGEX
        .captures(reply)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .unwrap_or(reply);

    serde_json::from_str::<Vec<String>>(body).map_err(|e| AppError::SuggestionParse(e.to_string()))
}
