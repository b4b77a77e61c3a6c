//! # Mentorra Gateway
//!
//! Async relay that forwards founder mentorship chat to a language-model
//! completion API and voice payloads to speech synthesis/transcription
//! vendors, shaping inputs and outputs into fixed JSON contracts.
//!
//! ## Endpoints
//!
//! - `POST /api/mentor-assist` - routes a founder message through the
//!   completion API and returns the mentor's structured reply
//! - `POST /api/voice/speak` - streams synthesized speech back to the caller
//! - `POST /api/voice/transcribe` - transcribes an uploaded audio file
//!
//! The relay holds no state of its own: conversational memory travels with
//! each request, and every failure surfaces as a JSON error body.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mentorra_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{ErrorBody, GatewayError, Result};

// Export core services and wire contracts
pub use core::audio::{AudioService, SpeechRequest, TranscriptionRequest, TranscriptionResponse};
pub use core::mentor::{FounderProfile, MentorRequest, MentorResponse, MentorService};
pub use core::providers::{ElevenLabsClient, OpenAiClient};

use tracing::info;

/// A minimal gateway wrapper tying configuration to the HTTP server
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting Mentorra Gateway");

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
