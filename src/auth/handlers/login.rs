/**
 * Login Handler
 *
 * Verifies email and password against the stored credentials and
 * returns a fresh session token. Unknown emails and wrong passwords
 * produce the same error so the response does not reveal which
 * accounts exist.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::password::{validate_email, verify_password};
use crate::auth::sessions::TokenKeys;
use crate::auth::users::get_user_by_email;
use crate::error::{ApiError, FieldError};
use crate::response::ApiResponse;

/// Handle user login
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `token_keys` - Signing keys for issuing the session token
/// * `payload` - Login request body, or the rejection produced when the
///   body is not valid JSON
///
/// # Returns
/// * `Ok(Json(...))` - Envelope carrying a fresh token
/// * `Err(ApiError::InvalidCredentials)` - Unknown email or wrong password
pub async fn login(
    State(pool): State<PgPool>,
    State(token_keys): State<Arc<TokenKeys>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Malformed login body: {}", rejection.body_text());
        ApiError::validation_single("body", rejection.body_text())
    })?;

    let (email, password) = validate_login(&request)?;
    tracing::info!("Login request for email: {}", email);

    let Some(user) = get_user_by_email(&pool, &email).await? else {
        tracing::warn!("Login failed: unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    let password_hash = user.password_hash.clone();
    let valid =
        tokio::task::spawn_blocking(move || verify_password(&password, &password_hash)).await??;

    if !valid {
        tracing::warn!("Login failed: wrong password for user {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let token = token_keys.issue(user.id)?;
    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(ApiResponse::ok(TokenResponse { token })))
}

/// Validate a login request, returning the normalized email and the
/// password on success.
fn validate_login(request: &LoginRequest) -> Result<(String, String), ApiError> {
    let mut errors = Vec::new();

    let email = match request.email.as_deref() {
        Some(raw) => match validate_email(raw) {
            Ok(email) => Some(email),
            Err(field_error) => {
                errors.push(field_error);
                None
            }
        },
        None => {
            errors.push(FieldError::required("email"));
            None
        }
    };

    if request.password.is_none() {
        errors.push(FieldError::required("password"));
    }

    match (email, request.password.as_deref()) {
        (Some(email), Some(password)) if errors.is_empty() => Ok((email, password.to_string())),
        _ => Err(ApiError::validation(errors)),
    }
}
