//! # Server Module
//!
//! Startup concerns: environment configuration, shared state, and
//! application assembly.
//!
//! ## Module Structure
//!
//! ```text
//! server/
//! ├── config.rs  - Settings from environment variables
//! ├── state.rs   - Shared application state
//! └── init.rs    - Pool, keys, and router assembly
//! ```

/// Environment configuration
pub mod config;

/// Shared application state
pub mod state;

/// Application assembly
pub mod init;

// Re-export commonly used items
pub use config::{connect_database, ConfigError, Settings};
pub use init::{create_app, InitError};
pub use state::AppState;
