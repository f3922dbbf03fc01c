/**
 * Post Handlers
 *
 * HTTP handlers for creating, listing, and deleting posts. Every
 * operation runs as the authenticated caller: listings are scoped to
 * the caller's rows and deletion checks ownership before touching the
 * table. Listings go through the per-user cache; both mutations drop
 * the owner's cache entry.
 */

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{ApiError, FieldError};
use crate::middleware::auth::AuthUser;
use crate::posts::cache::PostCache;
use crate::posts::db::{self, Post};
use crate::response::ApiResponse;

/// Longest accepted title, matching the column width
const MAX_TITLE_LEN: usize = 255;

/// Post creation request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreatePostRequest {
    /// Optional post title
    #[serde(default)]
    pub title: Option<String>,
    /// Post body
    #[serde(default)]
    pub content: Option<String>,
}

/// Post as returned to clients
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostResponse {
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

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Create a post owned by the caller
///
/// # Returns
/// * `Ok((StatusCode::CREATED, Json(...)))` - Envelope carrying the new post's id
/// * `Err(ApiError::Validation)` - Missing or invalid fields
pub async fn create_post(
    State(pool): State<PgPool>,
    State(cache): State<PostCache>,
    AuthUser(auth): AuthUser,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<i64>>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Malformed post body: {}", rejection.body_text());
        ApiError::validation_single("body", rejection.body_text())
    })?;

    let (title, content) = validate_post(&request)?;

    let post = db::save_post(&pool, title, content, auth.user_id).await?;
    cache.invalidate(auth.user_id);
    tracing::info!("Post created: {} by user {}", post.id, auth.user_id);

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post.id))))
}

/// List the caller's posts, oldest first
///
/// Serves from the cache when a fresh entry exists, otherwise loads
/// from the database and stores the result for later requests.
pub async fn list_posts(
    State(pool): State<PgPool>,
    State(cache): State<PostCache>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, ApiError> {
    if let Some(posts) = cache.get(auth.user_id) {
        tracing::debug!("Post listing served from cache for user {}", auth.user_id);
        return Ok(Json(ApiResponse::list(posts)));
    }

    let posts: Vec<PostResponse> = db::load_posts_for_user(&pool, auth.user_id)
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    cache.store(auth.user_id, posts.clone());
    tracing::debug!(
        "Post listing loaded from database for user {} ({} posts)",
        auth.user_id,
        posts.len()
    );

    Ok(Json(ApiResponse::list(posts)))
}

/// Delete one of the caller's posts
///
/// # Returns
/// * `Ok(StatusCode::OK)` - Post deleted, empty body
/// * `Err(ApiError::NotFound)` - No post with that id
/// * `Err(ApiError::NotOwner)` - Post belongs to someone else
pub async fn delete_post(
    State(pool): State<PgPool>,
    State(cache): State<PostCache>,
    AuthUser(auth): AuthUser,
    post_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(post_id) = post_id.map_err(|rejection| {
        tracing::warn!("Invalid post id: {}", rejection.body_text());
        ApiError::validation_single("post_id", rejection.body_text())
    })?;

    let owner = db::load_post_owner(&pool, post_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if owner != auth.user_id {
        tracing::warn!(
            "User {} attempted to delete post {} owned by user {}",
            auth.user_id,
            post_id,
            owner
        );
        return Err(ApiError::NotOwner);
    }

    db::delete_post(&pool, post_id, auth.user_id).await?;
    cache.invalidate(auth.user_id);
    tracing::info!("Post deleted: {} by user {}", post_id, auth.user_id);

    Ok(StatusCode::OK)
}

/// Validate a post creation request, returning the title and body on
/// success.
fn validate_post(request: &CreatePostRequest) -> Result<(Option<String>, String), ApiError> {
    let mut errors = Vec::new();

    if let Some(title) = request.title.as_deref() {
        if title.chars().count() > MAX_TITLE_LEN {
            errors.push(FieldError::new(
                "title",
                format!("Title must be at most {} characters long", MAX_TITLE_LEN),
            ));
        }
    }

    match request.content.as_deref() {
        None => errors.push(FieldError::required("content")),
        Some(content) if content.trim().is_empty() => {
            errors.push(FieldError::new("content", "Content must not be empty"));
        }
        Some(_) => {}
    }

    match (&request.title, request.content.as_deref()) {
        (title, Some(content)) if errors.is_empty() => Ok((title.clone(), content.to_string())),
        _ => Err(ApiError::validation(errors)),
    }
}
