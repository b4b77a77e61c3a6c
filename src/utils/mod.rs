//! Utility modules for the Mentorra Gateway
//!
//! Error handling lives here; the module split mirrors the rest of the
//! crate so future cross-cutting utilities have a home.

pub mod error;
