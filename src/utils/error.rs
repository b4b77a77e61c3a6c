//! Error handling for the gateway
//!
//! This module defines the closed error taxonomy used throughout the relay
//! and its mapping onto HTTP responses.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad client input (missing upload, empty text, oversized payload)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Vendor or network failure while calling an upstream API
    #[error("Upstream error from {provider}: {message}")]
    Upstream {
        /// Vendor the failed call was addressed to
        provider: &'static str,
        /// Vendor or transport error text
        message: String,
    },

    /// Upstream responded, but its payload does not parse as the expected shape
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// Vendor that produced the unparseable payload
        provider: &'static str,
        /// Parse or schema error text
        message: String,
    },

    /// Upstream call exceeded the configured deadline
    #[error("Timeout calling {provider}")]
    Timeout {
        /// Vendor the timed-out call was addressed to
        provider: &'static str,
    },

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an upstream error
    pub fn upstream(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider,
            message: message.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed_response(provider: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider,
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Stable machine-readable tag for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::Config(_) => "CONFIG_ERROR",
            GatewayError::InvalidInput(_) => "INVALID_INPUT",
            GatewayError::Upstream { .. } => "UPSTREAM_ERROR",
            GatewayError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            GatewayError::Timeout { .. } => "UPSTREAM_TIMEOUT",
            GatewayError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// JSON error body sent on every failure path
///
/// `detail` carries the error text; clients that only know the original
/// contract can keep reading that single field.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    /// Human-readable error text
    pub detail: String,
    /// Stable error-kind tag
    pub code: String,
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            GatewayError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            GatewayError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
            GatewayError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
            code: self.code().to_string(),
        })
    }
}
