/**
 * Registration Handler
 *
 * Creates a new user account and returns a signed session token.
 *
 * # Flow
 * 1. Validate email format and password policy, collecting every
 *    violation into a single field-error response
 * 2. Hash the password on a blocking worker thread
 * 3. Insert the user row, mapping a unique-constraint violation on the
 *    email column to a duplicate-registration error
 * 4. Issue a token for the new user
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::auth::password::{hash_password, validate_email, validate_password};
use crate::auth::sessions::TokenKeys;
use crate::auth::users::{create_user, is_unique_violation};
use crate::error::{ApiError, FieldError};
use crate::response::ApiResponse;

/// Handle user registration
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `token_keys` - Signing keys for issuing the session token
/// * `payload` - Registration request body, or the rejection produced
///   when the body is not valid JSON
///
/// # Returns
/// * `Ok((StatusCode::CREATED, Json(...)))` - Envelope carrying the new token
/// * `Err(ApiError::Validation)` - Malformed body or policy violations
/// * `Err(ApiError::DuplicateUser)` - Email already registered
pub async fn register(
    State(pool): State<PgPool>,
    State(token_keys): State<Arc<TokenKeys>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<TokenResponse>>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Malformed registration body: {}", rejection.body_text());
        ApiError::validation_single("body", rejection.body_text())
    })?;

    let (email, password) = validate_registration(&request)?;
    tracing::info!("Registration request for email: {}", email);

    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

    let user = match create_user(&pool, email, password_hash).await {
        Ok(user) => user,
        Err(err) if is_unique_violation(&err) => {
            tracing::warn!("Registration rejected: email already registered");
            return Err(ApiError::DuplicateUser);
        }
        Err(err) => return Err(err.into()),
    };

    let token = token_keys.issue(user.id)?;
    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(TokenResponse { token })),
    ))
}

/// Validate a registration request, returning the normalized email and
/// the password on success.
fn validate_registration(request: &RegisterRequest) -> Result<(String, String), ApiError> {
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

    match (request.password.as_deref(), request.re_password.as_deref()) {
        (Some(password), Some(re_password)) => {
            errors.extend(validate_password(password, re_password));
        }
        (password, re_password) => {
            if password.is_none() {
                errors.push(FieldError::required("password"));
            }
            if re_password.is_none() {
                errors.push(FieldError::required("re_password"));
            }
        }
    }

    match (email, request.password.as_deref()) {
        (Some(email), Some(password)) if errors.is_empty() => Ok((email, password.to_string())),
        _ => Err(ApiError::validation(errors)),
    }
}
