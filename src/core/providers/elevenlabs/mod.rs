//! ElevenLabs provider
//!
//! Relay client for streamed speech synthesis.

mod client;
mod error;

pub use client::{AudioByteStream, ElevenLabsClient};
pub use error::ElevenLabsError;
