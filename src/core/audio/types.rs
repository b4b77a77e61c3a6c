//! Audio request and response records

use serde::{Deserialize, Serialize};

/// Speech synthesis request
///
/// Every parameter except the text itself has a fixed default, so callers
/// can send `{"text": "..."}` and get the stock voice.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequest {
    /// Text to convert to speech
    pub text: String,
    /// Voice to use
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    /// Synthesis model
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Output audio format
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

impl SpeechRequest {
    /// HTTP content type for the configured output format
    pub fn content_type(&self) -> &'static str {
        format_to_content_type(&self.output_format)
    }
}

/// Map an ElevenLabs output format id to an HTTP content type
///
/// The default format is mp3-based, so the stock request streams as
/// `audio/mpeg`.
pub fn format_to_content_type(format: &str) -> &'static str {
    if format.starts_with("pcm") {
        "audio/pcm"
    } else if format.starts_with("ulaw") {
        "audio/basic"
    } else if format.starts_with("opus") {
        "audio/ogg"
    } else {
        "audio/mpeg"
    }
}

/// Transcription request: raw upload bytes plus the filename hint forwarded
/// to the vendor
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Uploaded audio bytes
    pub file: Vec<u8>,
    /// Filename hint (defaults to `audio.mp3` when the upload carries none)
    pub filename: String,
}

/// Transcription response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub text: String,
}

fn default_voice_id() -> String {
    "JBFqnCBsd6RMkjVDRZzb".to_string()
}

fn default_model_id() -> String {
    "eleven_monolingual_v1".to_string()
}

fn default_output_format() -> String {
    "mp3_44100_128".to_string()
}
