/**
 * Response Envelope
 *
 * Every successful JSON response is wrapped in the same envelope:
 *
 * ```json
 * {
 *   "status_code": 200,
 *   "message": "ok",
 *   "result": ...
 * }
 * ```
 *
 * List responses additionally carry a `count` field. The envelope
 * `status_code` is the application-level code and stays 200 for successes
 * even when the HTTP status is 201; errors use their own codes (see the
 * `error` module).
 */

use serde::Serialize;

/// Success response envelope
///
/// Wraps a serializable payload together with the application-level status
/// code and the "ok" marker. Errors produce the same shape through
/// `ApiError::into_response` with `message` set to "not ok".
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Application-level status code (200 for every success)
    pub status_code: u16,
    /// "ok" on success, "not ok" on errors
    pub message: &'static str,
    /// The operation's payload
    pub result: T,
    /// Number of items, present on list responses only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in the success envelope
    pub fn ok(result: T) -> Self {
        Self {
            status_code: 200,
            message: "ok",
            result,
            count: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Wrap a list payload in the success envelope with its count
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            status_code: 200,
            message: "ok",
            result: items,
            count: Some(count),
        }
    }
}
