/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP API. Every failure a
 * client can observe is a variant here, carrying the HTTP status code and the
 * application-level code that goes into the response envelope.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * Produced while validating client input:
 * - `Validation` - field-level problems with the request body
 * - `PayloadTooLarge` - declared request body exceeds the configured maximum
 *
 * ## Authentication Errors
 *
 * Produced by login and by the bearer-token gate:
 * - `InvalidCredentials` - unknown email or wrong password
 * - `MissingToken` / `InvalidTokenType` / `InvalidToken`
 *
 * ## Resource Errors
 *
 * - `DuplicateUser` - email already registered (unique index violation)
 * - `NotFound` / `NotOwner` - post missing or owned by someone else
 *
 * ## Infrastructure Errors
 *
 * Wrapped via `#[from]` so handlers can use `?`. All of them map to the
 * internal-error envelope; details are logged, never sent to the client.
 */

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation problem
///
/// Serialized into the `result` array of a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending request field
    pub field: String,
    /// Human-readable description of the problem
    pub detail: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            detail: detail.into(),
        }
    }

    /// Field error for a missing required field
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "field required")
    }
}

/// API error type
///
/// This enum represents all failures the API can report. Each variant maps
/// to an HTTP status code (`status_code`), an application code placed in the
/// response envelope (`app_code`), and a client-facing message
/// (`client_message`).
///
/// # Usage
///
/// ```rust
/// use micropost::error::ApiError;
///
/// let err = ApiError::NotFound;
/// assert_eq!(err.app_code(), 4040);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation
    ///
    /// Carries one entry per offending field. The envelope `result` is the
    /// serialized list rather than a plain message string.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// A user with this email is already registered
    #[error("user with this email already exists")]
    DuplicateUser,

    /// Unknown email or wrong password
    ///
    /// Both cases produce this single variant so responses never reveal
    /// whether an email is registered.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Protected route called without an Authorization header
    #[error("missing token")]
    MissingToken,

    /// Authorization header present but the scheme is not Bearer
    #[error("invalid token type")]
    InvalidTokenType,

    /// Bearer token failed verification (bad signature, expired, malformed)
    #[error("invalid token")]
    InvalidToken,

    /// Declared request body size exceeds the configured maximum
    #[error("payload size exceeded")]
    PayloadTooLarge,

    /// Requested post does not exist
    #[error("item not found")]
    NotFound,

    /// Requested post exists but belongs to another user
    #[error("not owner")]
    NotOwner,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing error
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing error
    #[error("token signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// A blocking worker task panicked or was cancelled
    #[error("blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// Create a validation error from a list of field problems
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    /// Create a validation error for a single field
    pub fn validation_single(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, detail)])
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` / `DuplicateUser` / `PayloadTooLarge` - 400 Bad Request
    /// - `InvalidCredentials` / token errors - 401 Unauthorized
    /// - `NotFound` / `NotOwner` - 404 Not Found
    /// - Infrastructure errors - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateUser | Self::PayloadTooLarge => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials
            | Self::MissingToken
            | Self::InvalidTokenType
            | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::NotFound | Self::NotOwner => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Signing(_) | Self::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the application-level code placed in the response envelope
    ///
    /// These codes are part of the wire contract and are more granular than
    /// the HTTP status codes they accompany.
    pub fn app_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::DuplicateUser => 4044,
            Self::InvalidCredentials => 4004,
            Self::MissingToken => 4012,
            Self::InvalidTokenType => 4011,
            Self::InvalidToken => 4010,
            Self::PayloadTooLarge => 4100,
            Self::NotFound => 4040,
            Self::NotOwner => 4003,
            Self::Database(_) | Self::Hash(_) | Self::Signing(_) | Self::Blocking(_) => 500,
        }
    }

    /// Get the client-facing message for this error
    ///
    /// Infrastructure variants all collapse to a generic message; their
    /// details are logged server-side only.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation failed",
            Self::DuplicateUser => "User with this email already exists",
            Self::InvalidCredentials => "Invalid credentials",
            Self::MissingToken => "Missing token",
            Self::InvalidTokenType => "Invalid token type",
            Self::InvalidToken => "Invalid token",
            Self::PayloadTooLarge => "Payload size exceed 1 MB",
            Self::NotFound => "Item not found",
            Self::NotOwner => "Not owner",
            Self::Database(_) | Self::Hash(_) | Self::Signing(_) | Self::Blocking(_) => {
                "internal server error"
            }
        }
    }
}
