//! Symmetric encryption for the hydrocrypt library
//!
//! This crate provides [`SecretBox`], an authenticated-encryption construction
//! built from the SipHash-128 and ChaCha12 primitives in
//! `hydrocrypt-algorithms`, and uses the unified API error system.

#![forbid(unsafe_code)]

pub mod cipher;
pub mod error;
pub mod secretbox;

// Re-export main types for convenience
pub use cipher::SymmetricCipher;
pub use secretbox::{SecretBox, SecretBoxKey};

// Re-export the API error system instead of custom error types
pub use hydrocrypt_api::error::{validate, Error, Result, ResultExt};
