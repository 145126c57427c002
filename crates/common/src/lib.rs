//! Common implementations and shared functionality for the hydrocrypt library

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer};
