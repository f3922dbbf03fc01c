//! Error Module
//!
//! This module defines the API error taxonomy and its HTTP representation.
//!
//! # Module Structure
//!
//! ```
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and FieldError definitions
//! └── conversion.rs - IntoResponse implementation and fallback handler
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers return
//! `Result<_, ApiError>` and propagate failures with `?`. The conversion
//! emits the response envelope with the error's application code, so error
//! bodies and success bodies share one shape.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::fallback_handler;
pub use types::{ApiError, FieldError};
