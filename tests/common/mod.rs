//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Test server builders
//! - Authentication test helpers
//! - RSA key material for token tests

pub mod auth_helpers;
pub mod database;
pub mod keys;
pub mod server;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
pub use keys::*;
pub use server::*;
