use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::SpeechSynthesizer;
use crate::config::UpstreamConfig;
use crate::error::UpstreamError;

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'a str,
}

/// Client for an OpenAI-compatible `/audio/speech` endpoint.
///
/// Voice and model are fixed at construction; every call returns the
/// whole MP3 body in one buffer.
pub struct OpenAiSpeech {
    http: Client,
    base_url: String,
    model: String,
    voice: String,
    api_key: Option<String>,
}

impl OpenAiSpeech {
    pub fn new(http: Client, cfg: &UpstreamConfig) -> Self {
        Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            model: cfg.tts_model.clone(),
            voice: cfg.tts_voice.clone(),
            api_key: cfg.api_key.clone(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeech {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;
        let url = format!("{}/audio/speech", self.base_url);
        tracing::debug!(target: "tts", model = %self.model, voice = %self.voice, "POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&SpeechRequest {
                model: &self.model,
                voice: &self.voice,
                input: text,
                response_format: "mp3",
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(target: "tts", status, body = %body, "speech synthesis rejected");
            return Err(UpstreamError::Status { status, body });
        }

        let audio = response.bytes().await?;
        tracing::debug!(target: "tts", bytes = audio.len(), "speech synthesized");
        Ok(audio.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header, HeaderMap, StatusCode},
        response::IntoResponse,
        routing::post,
        Json, Router,
    };
    use serde_json::Value;
    use std::time::Duration;

    const FAKE_MP3: &[u8] = &[0x49, 0x44, 0x33, 0x04, 0x00, 0xff, 0xfb, 0x90];

    async fn spawn_mock(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1", addr)
    }

    fn upstream(base_url: &str) -> UpstreamConfig {
        UpstreamConfig {
            api_key: Some("sk-test".to_string()),
            base_url: base_url.to_string(),
            chat_model: "gpt-3.5-turbo".to_string(),
            tts_model: "tts-1".to_string(),
            tts_voice: "alloy".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    async fn speech(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
        let authorized = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            == Some("Bearer sk-test");
        let well_formed = body["model"] == "tts-1"
            && body["voice"] == "alloy"
            && body["response_format"] == "mp3"
            && body["input"] == "Bonjour";

        if authorized && well_formed {
            ([(header::CONTENT_TYPE, "audio/mpeg")], FAKE_MP3.to_vec()).into_response()
        } else {
            (StatusCode::BAD_REQUEST, "unexpected request").into_response()
        }
    }

    #[tokio::test]
    async fn returns_raw_audio_bytes() {
        let base = spawn_mock(Router::new().route("/v1/audio/speech", post(speech))).await;
        let tts = OpenAiSpeech::new(Client::new(), &upstream(&base));

        let audio = tts.synthesize("Bonjour").await.unwrap();
        assert_eq!(audio, FAKE_MP3);
    }

    #[tokio::test]
    async fn provider_error_is_reported() {
        let app = Router::new().route(
            "/v1/audio/speech",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let base = spawn_mock(app).await;
        let tts = OpenAiSpeech::new(Client::new(), &upstream(&base));

        match tts.synthesize("Bonjour").await {
            Err(UpstreamError::Status { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_provider_is_transport_error() {
        let tts = OpenAiSpeech::new(Client::new(), &upstream("http://127.0.0.1:1/v1"));

        assert!(matches!(
            tts.synthesize("Bonjour").await,
            Err(UpstreamError::Transport(_))
        ));
    }
}
