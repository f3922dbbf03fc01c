/**
 * Current User Handler
 *
 * Returns the profile of the authenticated caller. The user id comes
 * from the verified token, so a row can only be missing when the
 * account was deleted after the token was issued.
 */

use axum::extract::State;
use axum::response::Json;
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;

/// Return the authenticated user's profile
///
/// # Returns
/// * `Ok(Json(...))` - Envelope carrying the profile
/// * `Err(ApiError::NotFound)` - Account no longer exists
pub async fn me(
    State(pool): State<PgPool>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = users::get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token presented for missing user: {}", auth.user_id);
            ApiError::NotFound
        })?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
