//! # Routes Module
//!
//! Route registration and router assembly.
//!
//! ## Module Structure
//!
//! ```text
//! routes/
//! ├── router.rs      - Router assembly and layers
//! └── api_routes.rs  - Endpoint groups
//! ```

/// Router assembly
pub mod router;

/// Endpoint groups
pub mod api_routes;

// Re-export commonly used items
pub use router::create_router;
