//! # Authentication Module
//!
//! Account management and session tokens: password hashing and policy
//! checks, RS256 token issue/verify, user persistence, and the HTTP
//! handlers that tie them together.
//!
//! ## Module Structure
//!
//! ```text
//! auth/
//! ├── password.rs  - Bcrypt hashing and credential validation
//! ├── sessions.rs  - Signed session tokens (issue/verify)
//! ├── users.rs     - User model and database access
//! └── handlers/    - HTTP handlers (register, login, me)
//! ```

/// Password hashing and validation
pub mod password;

/// Session token issue and verification
pub mod sessions;

/// User model and database operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used items
pub use sessions::{Claims, TokenKeys};
pub use users::User;
