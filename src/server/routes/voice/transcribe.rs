//! Transcription endpoint
//!
//! Accepts a multipart upload and relays the audio bytes to the
//! transcription API.

use crate::core::audio::{AudioService, TranscriptionRequest};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, ResponseError, Result as ActixResult, web};
use futures::StreamExt;
use tracing::{error, info};

/// Transcription endpoint
///
/// Accepts multipart/form-data with the audio under a `file` field. The
/// whole upload is read into memory before being forwarded.
pub async fn speech_to_text(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    info!("Transcription request");

    let mut file_data: Option<Vec<u8>> = None;
    let mut filename = String::from("audio.mp3");

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(f) => f,
            Err(e) => {
                error!("Error reading multipart field: {}", e);
                return Ok(GatewayError::invalid_input(format!("Invalid multipart data: {}", e))
                    .error_response());
            }
        };

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match field_name.as_str() {
            "file" => {
                if let Some(cd) = field.content_disposition() {
                    if let Some(fname) = cd.get_filename() {
                        filename = fname.to_string();
                    }
                }

                let mut data = Vec::new();
                while let Some(chunk) = field.next().await {
                    match chunk {
                        Ok(bytes) => data.extend_from_slice(&bytes),
                        Err(e) => {
                            error!("Error reading file chunk: {}", e);
                            return Ok(GatewayError::invalid_input("Error reading uploaded file")
                                .error_response());
                        }
                    }
                }
                file_data = Some(data);
            }
            _ => {
                // Drain unknown fields
                while field.next().await.is_some() {}
            }
        }
    }

    let file = match file_data {
        Some(data) => data,
        None => {
            return Ok(GatewayError::invalid_input("No audio file provided").error_response());
        }
    };

    let service = AudioService::new(state.openai.clone(), state.elevenlabs.clone());
    let request = TranscriptionRequest { file, filename };

    match service.transcribe(request).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!("Transcription error: {}", e);
            Ok(e.error_response())
        }
    }
}
