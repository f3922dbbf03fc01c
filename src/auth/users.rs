/**
 * User Model and Database Operations
 *
 * This module handles user rows and their database operations. Email
 * uniqueness is owned by the database unique index; callers detect the
 * violation with `is_unique_violation` instead of pre-checking, so
 * concurrent registrations cannot race past each other.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// User email address (normalized, unique)
    pub email: String,
    /// Hashed password (bcrypt), never serialized outward
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Normalized user email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user, or the underlying database error. A duplicate email
/// surfaces as a unique-index violation; see `is_unique_violation`.
pub async fn create_user(
    pool: &PgPool,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Normalized user email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - User ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Check whether a database error is a unique-index violation
///
/// Used by registration to turn the `users.email` index violation into the
/// duplicate-email response.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation))
        .unwrap_or(false)
}
