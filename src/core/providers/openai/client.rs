//! OpenAI client implementation
//!
//! Thin relay client for the two language-model operations the gateway
//! forwards: routing chat completions (strict-JSON output) and audio
//! transcription.

use serde::Deserialize;
use tracing::debug;

use super::error::OpenAiError;
use crate::config::CompletionConfig;

/// Chat completion response, reduced to the fields the relay reads
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Transcription response, reduced to the text field
#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// OpenAI relay client
///
/// One instance lives for the process lifetime and is shared across request
/// handlers; the underlying reqwest client pools connections and applies the
/// configured per-request timeout.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: CompletionConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new OpenAI client
    pub fn new(config: CompletionConfig) -> Result<Self, OpenAiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| OpenAiError::ConfigurationError(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn api_key(&self) -> Result<String, OpenAiError> {
        self.config
            .get_api_key()
            .ok_or_else(|| OpenAiError::AuthenticationError("API key is required".to_string()))
    }

    /// Execute a routing chat completion constrained to JSON output
    ///
    /// Returns the raw content string of the first choice; the caller owns
    /// schema validation.
    pub async fn routing_completion(
        &self,
        system_prompt: &str,
        user_context: &str,
    ) -> Result<String, OpenAiError> {
        debug!(model = %self.config.model, "OpenAI chat completion request");

        let body = serde_json::json!({
            "model": self.config.model,
            "response_format": {"type": "json_object"},
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_context},
            ],
            "temperature": self.config.temperature,
        });

        let url = format!("{}/chat/completions", self.config.get_api_base());
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key()?))
            .json(&body)
            .send()
            .await
            .map_err(OpenAiError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.ok();
            return Err(OpenAiError::from_status(status, body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::ParseError(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| OpenAiError::ParseError("completion contained no choices".to_string()))
    }

    /// Transcribe an audio file to text
    ///
    /// The file bytes are forwarded as a multipart upload with the caller's
    /// filename hint.
    pub async fn transcribe_audio(
        &self,
        file: Vec<u8>,
        filename: &str,
    ) -> Result<String, OpenAiError> {
        debug!(
            model = %self.config.transcription_model,
            file_size = file.len(),
            "OpenAI transcription request"
        );

        let file_part = reqwest::multipart::Part::bytes(file)
            .file_name(filename.to_string())
            .mime_str("audio/mpeg")
            .map_err(|e| OpenAiError::InvalidRequestError(format!("Invalid MIME type: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.config.transcription_model.clone());

        let url = format!("{}/audio/transcriptions", self.config.get_api_base());
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key()?))
            .multipart(form)
            .send()
            .await
            .map_err(OpenAiError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.ok();
            return Err(OpenAiError::from_status(status, body));
        }

        let transcript: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::ParseError(e.to_string()))?;

        Ok(transcript.text)
    }
}
