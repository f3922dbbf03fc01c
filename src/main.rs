/**
 * Micropost Server Entry Point
 *
 * Loads settings from the environment, brings the application up, and
 * serves it over HTTP.
 */

use micropost::server::{create_app, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let settings = Settings::from_env()?;
    let app = create_app(&settings).await?;

    let address = format!("{}:{}", settings.server_host, settings.server_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
