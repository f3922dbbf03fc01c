/**
 * Payload Size Guard
 *
 * Rejects requests whose declared body size exceeds the configured
 * limit before any handler runs. Requests without a parseable
 * Content-Length header pass through untouched.
 */

use axum::extract::{Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Reject requests with an oversized declared body
///
/// # Errors
/// * `ApiError::PayloadTooLarge` - Content-Length exceeds the limit
pub async fn payload_guard(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let declared = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());

    if let Some(length) = declared {
        if length > app_state.max_payload_bytes {
            tracing::warn!(
                "Rejected payload of {} bytes (limit {})",
                length,
                app_state.max_payload_bytes
            );
            return Err(ApiError::PayloadTooLarge);
        }
    }

    Ok(next.run(request).await)
}
