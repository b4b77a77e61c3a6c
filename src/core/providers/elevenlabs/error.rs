//! ElevenLabs-specific error types and error mapping

use crate::utils::error::GatewayError;
use thiserror::Error;

/// ElevenLabs-specific error types
#[derive(Debug, Error)]
pub enum ElevenLabsError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Invalid request: {0}")]
    InvalidRequestError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out: {0}")]
    TimeoutError(String),

    #[error("Streaming error: {0}")]
    StreamingError(String),
}

impl ElevenLabsError {
    /// Map a transport-level reqwest failure onto the matching variant
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ElevenLabsError::TimeoutError(err.to_string())
        } else {
            ElevenLabsError::NetworkError(err.to_string())
        }
    }

    /// Map a non-success HTTP status (plus any body text) onto a variant
    pub fn from_status(status: u16, body: Option<String>) -> Self {
        let detail = body.unwrap_or_else(|| format!("HTTP {}", status));
        match status {
            400 | 422 => ElevenLabsError::InvalidRequestError(detail),
            401 => ElevenLabsError::AuthenticationError("Invalid API key".to_string()),
            429 => ElevenLabsError::RateLimitError("Rate limit exceeded".to_string()),
            _ => ElevenLabsError::ApiError(format!("HTTP {}: {}", status, detail)),
        }
    }
}

impl From<ElevenLabsError> for GatewayError {
    fn from(err: ElevenLabsError) -> Self {
        match err {
            ElevenLabsError::ConfigurationError(msg) => GatewayError::Config(msg),
            ElevenLabsError::TimeoutError(_) => GatewayError::Timeout {
                provider: "elevenlabs",
            },
            other => GatewayError::Upstream {
                provider: "elevenlabs",
                message: other.to_string(),
            },
        }
    }
}
