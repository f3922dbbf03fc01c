/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login, and me
 * handlers. Request fields are optional at the serde level so missing
 * fields surface as per-field validation errors rather than opaque
 * deserialization failures.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// New account's email address
    #[serde(default)]
    pub email: Option<String>,
    /// Chosen password (hashed before storage)
    #[serde(default)]
    pub password: Option<String>,
    /// Password repeated, must match
    #[serde(default)]
    pub re_password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    /// Account email address
    #[serde(default)]
    pub email: Option<String>,
    /// Account password
    #[serde(default)]
    pub password: Option<String>,
}

/// Token response
///
/// Returned by register and login inside the response envelope.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed session token
    pub token: String,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// The password hash never appears here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: i64,
    /// User's email address
    pub email: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
