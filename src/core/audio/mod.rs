//! Audio relay for speech synthesis and transcription
//!
//! Validates inbound payloads and forwards them to the vendor clients;
//! audio conversion itself happens entirely upstream.

mod types;

pub use types::{
    SpeechRequest, TranscriptionRequest, TranscriptionResponse, format_to_content_type,
};

use crate::core::providers::{AudioByteStream, ElevenLabsClient, OpenAiClient};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Maximum synthesis input length in characters
pub const MAX_SPEECH_INPUT_CHARS: usize = 4096;

/// Maximum transcription upload size in bytes (25MB)
pub const MAX_AUDIO_FILE_BYTES: usize = 25 * 1024 * 1024;

/// Audio service for handling synthesis and transcription requests
pub struct AudioService {
    openai: Arc<OpenAiClient>,
    elevenlabs: Arc<ElevenLabsClient>,
}

impl AudioService {
    /// Create a new audio service
    pub fn new(openai: Arc<OpenAiClient>, elevenlabs: Arc<ElevenLabsClient>) -> Self {
        Self { openai, elevenlabs }
    }

    /// Convert text to speech, returning the vendor byte stream
    pub async fn speech(&self, request: SpeechRequest) -> Result<AudioByteStream> {
        info!(
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            text_len = request.text.len(),
            "Generating speech"
        );

        if request.text.trim().is_empty() {
            return Err(GatewayError::invalid_input("Input text is empty"));
        }
        if request.text.len() > MAX_SPEECH_INPUT_CHARS {
            return Err(GatewayError::invalid_input(
                "Input text too long (max 4096 characters)",
            ));
        }

        let stream = self
            .elevenlabs
            .synthesize(
                &request.text,
                &request.voice_id,
                &request.model_id,
                &request.output_format,
            )
            .await?;

        Ok(stream)
    }

    /// Transcribe uploaded audio to text
    pub async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResponse> {
        info!(
            filename = %request.filename,
            file_size = request.file.len(),
            "Transcribing audio"
        );

        if request.file.is_empty() {
            return Err(GatewayError::invalid_input("No audio file provided"));
        }
        if request.file.len() > MAX_AUDIO_FILE_BYTES {
            return Err(GatewayError::invalid_input("Audio file too large (max 25MB)"));
        }

        let text = self
            .openai
            .transcribe_audio(request.file, &request.filename)
            .await?;

        Ok(TranscriptionResponse { text })
    }
}
