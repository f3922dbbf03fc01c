//! Authentication test helpers
//!
//! Provides utilities for creating test users and building
//! Authorization headers.

use sqlx::PgPool;

use micropost::auth::password::hash_password;
use micropost::auth::sessions::TokenKeys;
use micropost::auth::users::create_user;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database with a ready-to-use token
///
/// The token is signed with the given keys, which must match the ones
/// the test server verifies with.
pub async fn create_test_user(
    pool: &PgPool,
    token_keys: &TokenKeys,
    email: &str,
    password: &str,
) -> TestUser {
    let password_hash = hash_password(password).expect("failed to hash test password");

    let user = create_user(pool, email.to_string(), password_hash)
        .await
        .expect("failed to insert test user");

    let token = token_keys
        .issue(user.id)
        .expect("failed to issue test token");

    TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
