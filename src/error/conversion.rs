/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, turning every error
 * into the response envelope the API speaks.
 *
 * # Response Format
 *
 * Error responses share the envelope of successful responses:
 * ```json
 * {
 *   "status_code": 4040,
 *   "message": "not ok",
 *   "result": "Item not found"
 * }
 * ```
 *
 * For validation errors, `result` is a list of `{field, detail}` objects
 * instead of a message string. Infrastructure errors are logged with full
 * detail here and reduced to a generic message for the client.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let result = match &self {
            ApiError::Validation(errors) => json!(errors),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                json!(self.client_message())
            }
            ApiError::Hash(e) => {
                tracing::error!("Password hashing error: {}", e);
                json!(self.client_message())
            }
            ApiError::Signing(e) => {
                tracing::error!("Token signing error: {}", e);
                json!(self.client_message())
            }
            ApiError::Blocking(e) => {
                tracing::error!("Blocking task failed: {}", e);
                json!(self.client_message())
            }
            _ => json!(self.client_message()),
        };

        let body = Json(json!({
            "status_code": self.app_code(),
            "message": "not ok",
            "result": result,
        }));

        (self.status_code(), body).into_response()
    }
}

/// Fallback handler for unmatched routes
///
/// Any request outside the route table gets the not-found envelope instead
/// of a bare 404.
pub async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}
