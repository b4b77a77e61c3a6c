//! Mentor-assist endpoint

use crate::core::mentor::{MentorRequest, MentorService};
use crate::server::state::AppState;
use actix_web::{HttpResponse, ResponseError, Result as ActixResult, web};
use tracing::{error, info};

/// Mentor-assist endpoint
///
/// Routes a founder message through the completion API and returns the
/// mentor's structured reply.
pub async fn mentor_assist(
    state: web::Data<AppState>,
    request: web::Json<MentorRequest>,
) -> ActixResult<HttpResponse> {
    info!(
        message_len = request.user_message.len(),
        "Mentor assist request"
    );

    let service = MentorService::new(state.openai.clone());

    match service.assist(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!("Mentor assist error: {}", e);
            Ok(e.error_response())
        }
    }
}
