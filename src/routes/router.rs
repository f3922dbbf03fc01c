/**
 * Main Application Router
 *
 * Assembles the route groups and the application-wide layers. The
 * payload guard wraps every route, and HTTP tracing wraps the payload
 * guard so rejected requests still show up in the logs.
 */

use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::fallback_handler;
use crate::middleware::payload::payload_guard;
use crate::routes::api_routes::{configure_protected_routes, configure_user_routes};
use crate::server::state::AppState;

/// Build the complete application router
///
/// # Arguments
/// * `app_state` - Shared application state
///
/// # Returns
/// * `Router` - Ready to serve
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(configure_user_routes())
        .merge(configure_protected_routes(app_state.clone()))
        .fallback(fallback_handler)
        .layer(from_fn_with_state(app_state.clone(), payload_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
