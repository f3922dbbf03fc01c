//! Micropost - Main Library
//!
//! Micropost is a multi-tenant posting service built with Rust: accounts
//! with bcrypt credentials, RS256 session tokens, and ownership-scoped
//! posts behind a token gate, served over JSON with a uniform response
//! envelope.
//!
//! # Overview
//!
//! This library provides the core functionality for Micropost, including:
//! - Account registration and login with bcrypt password hashing
//! - Time-limited RS256 session tokens
//! - Ownership-scoped post storage with a per-user listing cache
//! - A request payload limit applied before any handler runs
//!
//! # Module Structure
//!
//! - **`auth`** - Accounts and sessions
//!   - Password hashing and credential validation
//!   - Token issue and verification
//!   - Registration, login, and profile handlers
//!
//! - **`posts`** - Post storage
//!   - Relational post model and queries
//!   - Per-user TTL listing cache
//!   - Create, list, and delete handlers
//!
//! - **`middleware`** - Request guards
//!   - Bearer token gate for the protected route group
//!   - Declared payload size limit
//!
//! - **`routes`** - Router assembly and endpoint groups
//!
//! - **`server`** - Environment settings, shared state, and startup
//!
//! - **`error`** - Error taxonomy and the "not ok" response envelope
//!
//! - **`response`** - The "ok" response envelope
//!
//! # Usage
//!
//! ```rust,no_run
//! use micropost::server::{create_app, Settings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let app = create_app(&settings).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result` throughout. Handler errors are
//! collected in [`error::ApiError`], which converts into the wire
//! envelope with the HTTP status and application code the endpoint
//! tables promise.

/// Accounts, passwords, and session tokens
pub mod auth;

/// Error taxonomy and response conversion
pub mod error;

/// Request-level guards
pub mod middleware;

/// Post storage and handlers
pub mod posts;

/// Success response envelope
pub mod response;

/// Route registration
pub mod routes;

/// Configuration, state, and startup
pub mod server;

// Re-export the most commonly used items
pub use error::ApiError;
pub use response::ApiResponse;
pub use routes::create_router;
pub use server::{create_app, AppState, Settings};
