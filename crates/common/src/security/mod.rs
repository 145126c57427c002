//! Security primitives for handling sensitive cryptographic material

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer};
