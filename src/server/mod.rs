//! HTTP server module
//!
//! This module contains the HTTP server implementation, application state
//! and route handlers.

pub mod builder;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
