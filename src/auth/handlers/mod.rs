//! # Authentication Handlers Module
//!
//! HTTP handlers for account registration, login, and the current-user
//! profile endpoint.
//!
//! ## Module Structure
//!
//! ```text
//! handlers/
//! ├── types.rs     - Request/response types
//! ├── register.rs  - POST /user/register/
//! ├── login.rs     - POST /user/login/
//! └── me.rs        - GET /user/me/
//! ```

/// Request and response types
pub mod types;

/// User registration handler
pub mod register;

/// User login handler
pub mod login;

/// Current user profile handler
pub mod me;

// Re-export handlers for routing
pub use login::login;
pub use me::me;
pub use register::register;

// Re-export types for external use
pub use types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
