use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::TextGenerator;
use crate::config::UpstreamConfig;
use crate::error::UpstreamError;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiChat {
    http: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiChat {
    pub fn new(http: Client, cfg: &UpstreamConfig) -> Self {
        Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            model: cfg.chat_model.clone(),
            api_key: cfg.api_key.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiChat {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(target: "llm", model = %self.model, "POST {}", url);

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(target: "llm", status, body = %body, "chat completion rejected");
            return Err(UpstreamError::Status { status, body });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                UpstreamError::Malformed("missing choices[0].message.content".to_string())
            })
    }
}
