/**
 * Application State
 *
 * Shared state handed to the router. Cloning is cheap: the pool,
 * keys, and cache are all reference-counted internally.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::sessions::TokenKeys;
use crate::posts::cache::PostCache;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,
    /// Token signing and verification keys
    pub token_keys: Arc<TokenKeys>,
    /// Per-user post listing cache
    pub post_cache: PostCache,
    /// Request payload limit in bytes
    pub max_payload_bytes: u64,
}

// FromRef lets handlers extract individual pieces of state

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(state: &AppState) -> Self {
        state.token_keys.clone()
    }
}

impl FromRef<AppState> for PostCache {
    fn from_ref(state: &AppState) -> Self {
        state.post_cache.clone()
    }
}
