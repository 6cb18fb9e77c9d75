pub mod openai;

use async_trait::async_trait;

use crate::error::UpstreamError;

pub use openai::OpenAiSpeech;

/// A hosted text-to-speech voice.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Renders `text` and returns the encoded audio (MP3).
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, UpstreamError>;
}
