//! Public API types for the hydrocrypt library
//!
//! This crate provides the error type shared by every hydrocrypt crate and
//! the zeroizing `SecretBytes` container used for key material.

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::SecretBytes;
