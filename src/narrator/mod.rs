pub mod assemble;

use std::sync::Arc;

use crate::api::{GenerateResponse, TripRequest};
use crate::error::AppError;
use crate::llm::TextGenerator;
use crate::prompt;
use crate::tts::SpeechSynthesizer;

pub use assemble::{audio_data_uri, parse_suggestions};

/// Runs the two request pipelines against injected providers.
pub struct Narrator {
    text: Arc<dyn TextGenerator>,
    speech: Arc<dyn SpeechSynthesizer>,
    script_words: u32,
}

impl Narrator {
    pub fn new(
        text: Arc<dyn TextGenerator>,
        speech: Arc<dyn SpeechSynthesizer>,
        script_words: u32,
    ) -> Self {
        Self {
            text,
            speech,
            script_words,
        }
    }

    /// Script first, then audio. Either both come back or an error does.
    pub async fn generate(&self, trip: &TripRequest) -> Result<GenerateResponse, AppError> {
        // 1. Build prompt
        let prompt = prompt::script_prompt(trip, self.script_words);
        tracing::debug!("Script prompt: {}", prompt);

        // 2. Generate script
        let script = self
            .text
            .generate(prompt::NARRATOR_PERSONA, &prompt)
            .await
            .map_err(AppError::Generation)?;
        tracing::info!(location = %trip.location, words = script.split_whitespace().count(), "Script generated");

        // 3. Synthesize
        let audio = self
            .speech
            .synthesize(&script)
            .await
            .map_err(AppError::Synthesis)?;
        tracing::info!(location = %trip.location, bytes = audio.len(), "Audio synthesized");

        // 4. Assemble
        Ok(GenerateResponse {
            audio_url: audio_data_uri(&audio),
            script,
        })
    }

    /// Never fails: any upstream or parse problem degrades to no suggestions.
    pub async fn suggest(&self, location: &str) -> Vec<String> {
        match self.try_suggest(location).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!("Error fetching suggestions for {}: {}", location, e);
                Vec::new()
            }
        }
    }

    async fn try_suggest(&self, location: &str) -> Result<Vec<String>, AppError> {
        let reply = self
            .text
            .generate(prompt::ASSISTANT_PERSONA, &prompt::suggestion_prompt(location))
            .await
            .map_err(AppError::Generation)?;
        parse_suggestions(&reply)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::UpstreamError;
    use crate::llm::TextGenerator;
    use crate::tts::SpeechSynthesizer;

    /// Replies with a canned result and remembers the prompts it saw.
    pub struct FakeText {
        reply: Result<String, u16>,
        pub prompts: Mutex<Vec<(String, String)>>,
    }

    impl FakeText {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeText {
        async fn generate(&self, system: &str, prompt: &str) -> Result<String, UpstreamError> {
            self.prompts
                .lock()
                .unwrap()
                .push((system.to_string(), prompt.to_string()));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(UpstreamError::Status {
                    status: *status,
                    body: "upstream unavailable".to_string(),
                }),
            }
        }
    }

    pub struct FakeSpeech {
        audio: Option<Vec<u8>>,
        pub calls: AtomicUsize,
    }

    impl FakeSpeech {
        pub fn returning(audio: &[u8]) -> Self {
            Self {
                audio: Some(audio.to_vec()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                audio: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SpeechSynthesizer for FakeSpeech {
        async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.audio.clone().ok_or(UpstreamError::Timeout)
        }
    }
}
