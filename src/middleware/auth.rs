/**
 * Authentication Middleware
 *
 * Gate for the protected route group. Reads the Authorization header,
 * checks the Bearer scheme, verifies the token, and attaches the
 * caller's identity to the request for handlers to extract.
 *
 * The three failure modes are distinct so clients can tell a missing
 * header from a wrong scheme from a bad token.
 */

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity attached to a request after token verification
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    /// Verified user's ID
    pub user_id: i64,
}

/// Verify the Bearer token and attach the caller's identity
///
/// # Errors
/// * `ApiError::MissingToken` - No Authorization header
/// * `ApiError::InvalidTokenType` - Scheme is not Bearer
/// * `ApiError::InvalidToken` - Bad signature, expired, or garbled token
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Request without Authorization header");
            ApiError::MissingToken
        })?;

    let token = parse_bearer(header)?;

    let user_id = app_state.token_keys.verify(token).map_err(|err| {
        tracing::warn!("Token rejected: {:?}", err.kind());
        ApiError::InvalidToken
    })?;

    tracing::debug!("Authenticated request for user {}", user_id);
    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Split an Authorization header into scheme and token, accepting only
/// the Bearer scheme (case-insensitive).
fn parse_bearer(header: &str) -> Result<&str, ApiError> {
    let (scheme, token) = header.split_once(' ').unwrap_or((header, ""));

    if !scheme.eq_ignore_ascii_case("bearer") {
        tracing::warn!("Unsupported Authorization scheme: {}", scheme);
        return Err(ApiError::InvalidTokenType);
    }

    Ok(token)
}

/// Extractor giving handlers the verified caller
///
/// Only meaningful on routes behind [`auth_middleware`]; rejects when
/// no identity was attached.
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(AuthUser)
            .ok_or(ApiError::MissingToken)
    }
}
