//! OpenAI-specific error types and error mapping
//!
//! Handles error conversion from OpenAI API responses to the gateway's
//! unified error taxonomy.

use crate::utils::error::GatewayError;
use thiserror::Error;

/// OpenAI-specific error types
#[derive(Debug, Error)]
pub enum OpenAiError {
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

    #[error("Response parsing failed: {0}")]
    ParseError(String),
}

impl OpenAiError {
    /// Map a transport-level reqwest failure onto the matching variant
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAiError::TimeoutError(err.to_string())
        } else {
            OpenAiError::NetworkError(err.to_string())
        }
    }

    /// Map a non-success HTTP status (plus any body text) onto a variant
    pub fn from_status(status: u16, body: Option<String>) -> Self {
        let detail = body.unwrap_or_else(|| format!("HTTP {}", status));
        match status {
            400 => OpenAiError::InvalidRequestError(detail),
            401 => OpenAiError::AuthenticationError("Invalid API key".to_string()),
            429 => OpenAiError::RateLimitError("Rate limit exceeded".to_string()),
            _ => OpenAiError::ApiError(format!("HTTP {}: {}", status, detail)),
        }
    }
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::ConfigurationError(msg) => GatewayError::Config(msg),
            OpenAiError::TimeoutError(_) => GatewayError::Timeout { provider: "openai" },
            OpenAiError::ParseError(msg) => GatewayError::MalformedResponse {
                provider: "openai",
                message: msg,
            },
            other => GatewayError::Upstream {
                provider: "openai",
                message: other.to_string(),
            },
        }
    }
}
