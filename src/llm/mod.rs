pub mod openai;

use async_trait::async_trait;

use crate::error::UpstreamError;

pub use openai::OpenAiChat;

/// A hosted chat model that turns a persona and a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the content of the first completion.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, UpstreamError>;
}
