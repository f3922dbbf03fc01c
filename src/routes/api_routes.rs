/**
 * API Route Configuration
 *
 * Groups endpoints by authentication requirement. Account creation and
 * login are public; everything else sits behind the token middleware,
 * attached with route_layer so the fallback stays reachable without a
 * token.
 */

use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::auth::handlers::{login, me, register};
use crate::middleware::auth::auth_middleware;
use crate::posts::handlers::{create_post, delete_post, list_posts};
use crate::server::state::AppState;

/// Public account routes
///
/// # Routes
/// * `POST /user/register/` - Create an account, returns a token
/// * `POST /user/login/` - Exchange credentials for a token
pub fn configure_user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/register/", post(register))
        .route("/user/login/", post(login))
}

/// Token-protected routes
///
/// # Routes
/// * `GET /user/me/` - Authenticated user's profile
/// * `POST /post/` - Create a post
/// * `GET /post/` - List the caller's posts
/// * `DELETE /post/{post_id}/` - Delete one of the caller's posts
pub fn configure_protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/user/me/", get(me))
        .route("/post/", post(create_post).get(list_posts))
        .route("/post/{post_id}/", delete(delete_post))
        .route_layer(from_fn_with_state(app_state, auth_middleware))
}
