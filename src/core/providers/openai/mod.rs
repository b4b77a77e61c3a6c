//! OpenAI provider
//!
//! Relay client for chat completions and audio transcription.

mod client;
mod error;

pub use client::OpenAiClient;
pub use error::OpenAiError;
