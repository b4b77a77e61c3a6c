//! ElevenLabs client implementation
//!
//! Relay client for the speech-synthesis endpoint. Synthesis output is
//! returned as the vendor's byte stream so the HTTP layer can forward chunks
//! as they arrive.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::pin::Pin;
use tracing::debug;

use super::error::ElevenLabsError;
use crate::config::SpeechConfig;

/// Finite stream of synthesized audio chunks, in vendor arrival order
pub type AudioByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, ElevenLabsError>> + Send>>;

/// ElevenLabs relay client
///
/// One instance lives for the process lifetime and is shared across request
/// handlers.
#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    config: SpeechConfig,
    client: reqwest::Client,
}

impl ElevenLabsClient {
    /// Create a new ElevenLabs client
    pub fn new(config: SpeechConfig) -> Result<Self, ElevenLabsError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ElevenLabsError::ConfigurationError(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn api_key(&self) -> Result<String, ElevenLabsError> {
        self.config
            .get_api_key()
            .ok_or_else(|| ElevenLabsError::AuthenticationError("API key is required".to_string()))
    }

    /// Convert text to speech, returning the vendor's audio byte stream
    ///
    /// The stream ends when the vendor stream ends and is not restartable.
    pub async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        model_id: &str,
        output_format: &str,
    ) -> Result<AudioByteStream, ElevenLabsError> {
        debug!(voice_id, model_id, output_format, text_len = text.len(), "ElevenLabs synthesis request");

        let url = format!(
            "{}/v1/text-to-speech/{}/stream",
            self.config.get_api_base(),
            voice_id
        );

        let response = self
            .client
            .post(&url)
            .query(&[("output_format", output_format)])
            .header("xi-api-key", self.api_key()?)
            .json(&serde_json::json!({
                "text": text,
                "model_id": model_id,
            }))
            .send()
            .await
            .map_err(ElevenLabsError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.ok();
            return Err(ElevenLabsError::from_status(status, body));
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| ElevenLabsError::StreamingError(e.to_string())));

        Ok(Box::pin(stream))
    }
}
