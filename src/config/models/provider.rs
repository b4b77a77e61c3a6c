//! Vendor client configuration
//!
//! Configuration for the two upstream services the relay depends on: the
//! language-model API (completion + transcription) and the speech-synthesis
//! vendor.

use serde::{Deserialize, Serialize};

/// Configuration for the language-model vendor (completions and transcription)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// API key (falls back to the OPENAI_API_KEY environment variable)
    pub api_key: Option<String>,

    /// API base URL (default: https://api.openai.com/v1)
    pub api_base: Option<String>,

    /// Completion model used for mentor routing
    #[serde(default = "default_completion_model")]
    pub model: String,

    /// Transcription model
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,

    /// Sampling temperature for routing completions
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            model: default_completion_model(),
            transcription_model: default_transcription_model(),
            temperature: default_temperature(),
            timeout: default_timeout(),
        }
    }
}

impl CompletionConfig {
    /// Get API key with environment variable fallback
    pub fn get_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }

    /// Get API base with environment variable fallback
    pub fn get_api_base(&self) -> String {
        self.api_base
            .clone()
            .or_else(|| std::env::var("OPENAI_API_BASE").ok())
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.get_api_key().is_none() {
            return Err(
                "OpenAI API key not provided and OPENAI_API_KEY environment variable not set"
                    .to_string(),
            );
        }
        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("Temperature must be between 0.0 and 2.0".to_string());
        }
        Ok(())
    }
}

/// Configuration for the speech-synthesis vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// API key (falls back to the ELEVENLABS_API_KEY environment variable)
    pub api_key: Option<String>,

    /// API base URL (default: https://api.elevenlabs.io)
    pub api_base: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            timeout: default_timeout(),
        }
    }
}

impl SpeechConfig {
    /// Get API key with environment variable fallback
    pub fn get_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("ELEVENLABS_API_KEY").ok())
    }

    /// Get API base with environment variable fallback
    pub fn get_api_base(&self) -> String {
        self.api_base
            .clone()
            .or_else(|| std::env::var("ELEVENLABS_API_BASE").ok())
            .unwrap_or_else(|| "https://api.elevenlabs.io".to_string())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.get_api_key().is_none() {
            return Err(
                "ElevenLabs API key not provided and ELEVENLABS_API_KEY environment variable not set"
                    .to_string(),
            );
        }
        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn default_completion_model() -> String {
    "gpt-4-turbo".to_string()
}

fn default_transcription_model() -> String {
    "whisper-1".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_timeout() -> u64 {
    30
}
