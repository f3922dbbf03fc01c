/**
 * Server Configuration
 *
 * Flat settings loaded from the environment at startup. Values that
 * can default do; the database URL and the RSA key pair cannot, and
 * a variable that is present but unparsable aborts startup instead of
 * silently falling back.
 */

use std::env;
use std::time::Duration;

use sqlx::PgPool;

/// Configuration error raised during startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required variable absent
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
    /// Variable present but unparsable
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bind address
    pub server_host: String,
    /// Bind port
    pub server_port: u16,
    /// Postgres connection string
    pub database_url: String,
    /// PEM-encoded RSA private key for signing tokens
    pub rsa_private_key: String,
    /// PEM-encoded RSA public key for verifying tokens
    pub rsa_public_key: String,
    /// Token lifetime in minutes
    pub access_token_expire_minutes: u64,
    /// Request payload limit in mebibytes
    pub payload_max_size: u64,
    /// Post listing cache lifetime in seconds
    pub cache_time: u64,
}

impl Settings {
    /// Load settings from environment variables
    ///
    /// # Errors
    /// * `ConfigError::Missing` - DATABASE_URL, RSA_PRIVATE_KEY, or
    ///   RSA_PUBLIC_KEY is not set
    /// * `ConfigError::Invalid` - a numeric variable does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: parse_var("SERVER_PORT", 3000)?,
            database_url: require_var("DATABASE_URL")?,
            rsa_private_key: require_var("RSA_PRIVATE_KEY")?,
            rsa_public_key: require_var("RSA_PUBLIC_KEY")?,
            access_token_expire_minutes: parse_var("ACCESS_TOKEN_EXPIRE_MINUTES", 5040)?,
            payload_max_size: parse_var("PAYLOAD_MAX_SIZE", 1)?,
            cache_time: parse_var("CACHE_TIME", 300)?,
        };

        tracing::info!(
            "Settings loaded: {}:{}, token TTL {} minutes, payload limit {} MiB, cache TTL {} seconds",
            settings.server_host,
            settings.server_port,
            settings.access_token_expire_minutes,
            settings.payload_max_size,
            settings.cache_time
        );

        Ok(settings)
    }

    /// Payload limit in bytes
    pub fn max_payload_bytes(&self) -> u64 {
        self.payload_max_size * 1024 * 1024
    }

    /// Token lifetime
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_expire_minutes * 60)
    }

    /// Cache entry lifetime
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_time)
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

/// Connect to Postgres and apply pending migrations
///
/// # Errors
/// * `sqlx::Error` - Connection refused or a migration failed
pub async fn connect_database(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database");
    let pool = PgPool::connect(&settings.database_url).await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
