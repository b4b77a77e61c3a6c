//! Shared HTTP handlers

use actix_web::{HttpResponse, Responder};

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": crate::NAME,
        "version": crate::VERSION,
    }))
}
