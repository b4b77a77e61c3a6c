//! Vendor relay clients
//!
//! One long-lived client per upstream service, constructed at startup and
//! dependency-injected into the request handlers through the application
//! state.

pub mod elevenlabs;
pub mod openai;

pub use elevenlabs::{AudioByteStream, ElevenLabsClient, ElevenLabsError};
pub use openai::{OpenAiClient, OpenAiError};
