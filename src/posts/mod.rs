//! # Posts Module
//!
//! Ownership-scoped post storage with a TTL listing cache.
//!
//! ## Module Structure
//!
//! ```text
//! posts/
//! ├── db.rs        - Post model and database access
//! ├── cache.rs     - Per-user listing cache
//! └── handlers.rs  - HTTP handlers (create, list, delete)
//! ```

/// Post model and database operations
pub mod db;

/// Per-user post listing cache
pub mod cache;

/// HTTP handlers for post endpoints
pub mod handlers;

// Re-export commonly used items
pub use cache::PostCache;
pub use db::Post;
pub use handlers::{CreatePostRequest, PostResponse};
