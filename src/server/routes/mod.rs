//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod mentor;
pub mod voice;

use actix_web::web;

/// Register the relay's API routes
///
/// Separated from app construction so integration tests can mount the same
/// routes on a test service.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/mentor-assist", web::post().to(mentor::mentor_assist))
            .route("/voice/speak", web::post().to(voice::speak::text_to_speech))
            .route(
                "/voice/transcribe",
                web::post().to(voice::transcribe::speech_to_text),
            ),
    );
}
