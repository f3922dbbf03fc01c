/**
 * Server Initialization
 *
 * Brings the application up from settings: database pool with
 * migrations, token keys, cache, and finally the router. Any failure
 * here aborts startup rather than leaving the server half-working.
 */

use axum::Router;
use std::sync::Arc;

use crate::auth::sessions::TokenKeys;
use crate::posts::cache::PostCache;
use crate::routes::create_router;
use crate::server::config::{connect_database, Settings};
use crate::server::state::AppState;

/// Error raised while bringing the server up
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Database connection or migration failure
    #[error("database initialization failed: {0}")]
    Database(#[from] sqlx::Error),
    /// RSA key material rejected
    #[error("token key initialization failed: {0}")]
    Keys(#[from] jsonwebtoken::errors::Error),
}

/// Build the application router from settings
///
/// # Errors
/// * `InitError::Database` - Could not connect or migrate
/// * `InitError::Keys` - RSA key material is not valid PEM
pub async fn create_app(settings: &Settings) -> Result<Router, InitError> {
    let db_pool = connect_database(settings).await?;

    let token_keys = TokenKeys::from_pem(
        &settings.rsa_private_key,
        &settings.rsa_public_key,
        settings.token_ttl(),
    )?;
    tracing::info!("Token keys loaded");

    let app_state = AppState {
        db_pool,
        token_keys: Arc::new(token_keys),
        post_cache: PostCache::new(settings.cache_ttl()),
        max_payload_bytes: settings.max_payload_bytes(),
    };

    Ok(create_router(app_state))
}
