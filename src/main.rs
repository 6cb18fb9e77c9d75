use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod llm;
mod narrator;
mod prompt;
mod tts;

use api::routes::{create_router, AppState};
use config::AppConfig;
use llm::OpenAiChat;
use narrator::Narrator;
use tts::OpenAiSpeech;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let config = AppConfig::from_env();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Travel Narrator v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Static directory: {}", config.static_dir.display());
    tracing::info!(
        "Upstream: {} (chat {}, tts {}/{}, timeout {:?})",
        config.upstream.base_url,
        config.upstream.chat_model,
        config.upstream.tts_model,
        config.upstream.tts_voice,
        config.upstream.timeout
    );
    if config.upstream.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; generation requests will fail");
    }

    // Create upstream clients
    let http = reqwest::Client::builder()
        .timeout(config.upstream.timeout)
        .build()
        .expect("Failed to build HTTP client");
    let chat = OpenAiChat::new(http.clone(), &config.upstream);
    let speech = OpenAiSpeech::new(http, &config.upstream);

    // Create app state
    let state = Arc::new(AppState {
        narrator: Narrator::new(Arc::new(chat), Arc::new(speech), config.script_words),
    });

    // Create router
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
