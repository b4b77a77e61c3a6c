//! Speech synthesis endpoint (text-to-speech)

use crate::core::audio::{AudioService, SpeechRequest};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, ResponseError, Result as ActixResult, web};
use futures::StreamExt;
use tracing::{error, info};

/// Speech synthesis endpoint
///
/// Converts text to audio via the speech vendor and relays the result as a
/// streamed body. Chunks are forwarded in arrival order; empty chunks are
/// dropped. Once streaming has begun, a vendor failure can only terminate
/// the body early.
pub async fn text_to_speech(
    state: web::Data<AppState>,
    request: web::Json<SpeechRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    info!(
        voice_id = %request.voice_id,
        text_len = request.text.len(),
        "Text-to-speech request"
    );

    let content_type = request.content_type();
    let service = AudioService::new(state.openai.clone(), state.elevenlabs.clone());

    match service.speech(request).await {
        Ok(mut upstream) => {
            let body = async_stream::stream! {
                while let Some(chunk) = upstream.next().await {
                    match chunk {
                        Ok(bytes) => {
                            if !bytes.is_empty() {
                                yield Ok::<_, GatewayError>(bytes);
                            }
                        }
                        Err(e) => {
                            error!("Audio stream error: {}", e);
                            yield Err(GatewayError::from(e));
                            break;
                        }
                    }
                }
            };

            Ok(HttpResponse::Ok().content_type(content_type).streaming(body))
        }
        Err(e) => {
            error!("Text-to-speech error: {}", e);
            Ok(e.error_response())
        }
    }
}
