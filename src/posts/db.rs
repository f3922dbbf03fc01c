/**
 * Post Model & Database Operations
 *
 * Relational storage for posts. Every query that reads or mutates an
 * existing post is scoped by owner so one user can never touch
 * another user's rows.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Post database model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID
    pub id: i64,
    /// Optional post title
    pub title: Option<String>,
    /// Post body
    pub content: String,
    /// Owning user's ID
    pub user_id: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Insert a new post for the given owner
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `title` - Optional title
/// * `content` - Post body
/// * `user_id` - Owning user's ID
///
/// # Returns
/// * `Ok(Post)` - The stored post with its assigned id
/// * `Err(sqlx::Error)` - Database error
pub async fn save_post(
    pool: &PgPool,
    title: Option<String>,
    content: String,
    user_id: i64,
) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, content, user_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Load all posts owned by the given user, oldest first
pub async fn load_posts_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, user_id, created_at, updated_at
        FROM posts
        WHERE user_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Look up the owner of a post
///
/// # Returns
/// * `Ok(Some(user_id))` - Post exists, owned by `user_id`
/// * `Ok(None)` - No such post
pub async fn load_post_owner(pool: &PgPool, post_id: i64) -> Result<Option<i64>, sqlx::Error> {
    let owner = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT user_id
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(owner)
}

/// Delete a post, scoped to its owner
///
/// The owner scope in the WHERE clause means a mismatched caller
/// deletes nothing rather than someone else's row.
pub async fn delete_post(pool: &PgPool, post_id: i64, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}
