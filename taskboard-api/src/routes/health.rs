/// Liveness check endpoint
///
/// # Endpoint
///
/// ```text
/// GET /ping
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Pong!" }
/// ```

use crate::{error::ApiResult, routes::MessageResponse};
use axum::Json;

/// Ping handler
///
/// Answers without touching the store; useful as a deploy smoke check.
pub async fn ping() -> ApiResult<Json<MessageResponse>> {
    Ok(Json(MessageResponse::new("Pong!")))
}
