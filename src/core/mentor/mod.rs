//! Mentor-routing relay
//!
//! Builds the routing prompt context, forwards it to the completion API and
//! validates the strict-JSON reply. Track classification itself is delegated
//! entirely to the remote model.

pub mod prompt;
mod types;

pub use types::{FounderProfile, MentorRequest, MentorResponse};

use crate::core::providers::OpenAiClient;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Service handling mentor-assist requests
pub struct MentorService {
    openai: Arc<OpenAiClient>,
}

impl MentorService {
    /// Create a new mentor service
    pub fn new(openai: Arc<OpenAiClient>) -> Self {
        Self { openai }
    }

    /// Route a founder message and return the mentor's structured reply
    ///
    /// The remote output is trusted structurally (it must parse as the
    /// declared schema) but not semantically; there is no retry or repair of
    /// a malformed payload.
    pub async fn assist(&self, request: MentorRequest) -> Result<MentorResponse> {
        info!(
            message_len = request.user_message.len(),
            active_track = request.active_mentor_track.as_deref().unwrap_or("None"),
            "Mentor assist request"
        );

        let context = prompt::build_input_context(&request);

        let raw = self
            .openai
            .routing_completion(prompt::ROUTING_PROMPT, &context)
            .await?;

        let response: MentorResponse = serde_json::from_str(&raw).map_err(|e| {
            GatewayError::malformed_response(
                "openai",
                format!("routing output did not match the mentor schema: {}", e),
            )
        })?;

        Ok(response)
    }
}
