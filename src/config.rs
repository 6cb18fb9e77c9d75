use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TTS_MODEL: &str = "tts-1";
pub const DEFAULT_TTS_VOICE: &str = "alloy";

/// Target lengths the narration prompt knows how to ask for.
pub const SCRIPT_WORD_TARGETS: [u32; 2] = [75, 150];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub upstream: UpstreamConfig,
    pub script_words: u32,
}

/// Settings shared by the chat and speech clients.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    pub tts_model: String,
    pub tts_voice: String,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = var("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8000);

        let timeout_ms = var("UPSTREAM_TIMEOUT_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60_000);

        let script_words = match var("SCRIPT_WORDS").and_then(|v| v.parse::<u32>().ok()) {
            Some(words) if SCRIPT_WORD_TARGETS.contains(&words) => words,
            Some(words) => {
                tracing::warn!(
                    "SCRIPT_WORDS={} is not one of {:?}, using {}",
                    words,
                    SCRIPT_WORD_TARGETS,
                    SCRIPT_WORD_TARGETS[0]
                );
                SCRIPT_WORD_TARGETS[0]
            }
            None => SCRIPT_WORD_TARGETS[0],
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            static_dir: var("STATIC_DIR")
                .unwrap_or_else(|| "static".to_string())
                .into(),
            upstream: UpstreamConfig {
                api_key: var("OPENAI_API_KEY"),
                base_url: var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                chat_model: var("CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
                tts_model: var("TTS_MODEL").unwrap_or_else(|| DEFAULT_TTS_MODEL.to_string()),
                tts_voice: var("TTS_VOICE").unwrap_or_else(|| DEFAULT_TTS_VOICE.to_string()),
                timeout: Duration::from_millis(timeout_ms),
            },
            script_words,
        }
    }
}
