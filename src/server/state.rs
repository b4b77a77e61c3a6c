//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::providers::{ElevenLabsClient, OpenAiClient};
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Holds the two long-lived vendor clients. All fields are wrapped in Arc so
/// clones are cheap and handlers can hand them to the per-request services.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Language-model vendor client (completions + transcription)
    pub openai: Arc<OpenAiClient>,
    /// Speech-synthesis vendor client
    pub elevenlabs: Arc<ElevenLabsClient>,
}

impl AppState {
    /// Construct the state, building both vendor clients from config
    pub fn new(config: Config) -> Result<Self> {
        let openai = OpenAiClient::new(config.completion.clone())?;
        let elevenlabs = ElevenLabsClient::new(config.speech.clone())?;

        Ok(Self {
            config: Arc::new(config),
            openai: Arc::new(openai),
            elevenlabs: Arc::new(elevenlabs),
        })
    }
}
