//! # Middleware Module
//!
//! Request-level guards applied by the router: token authentication
//! for the protected route group and the payload size limit for the
//! whole application.
//!
//! ## Module Structure
//!
//! ```text
//! middleware/
//! ├── auth.rs     - Bearer token verification
//! └── payload.rs  - Declared body size limit
//! ```

/// Bearer token authentication
pub mod auth;

/// Payload size guard
pub mod payload;

// Re-export commonly used items
pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use payload::payload_guard;
