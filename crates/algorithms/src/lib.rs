//! Cryptographic primitives with constant-time implementation
//!
//! This crate provides the two building blocks of hydrocrypt:
//!
//! - [`SipHash128`], a keyed 128-bit PRF bound to an 8-byte context, usable
//!   one-shot or as a streaming authenticator with a cheap `reset`
//! - [`ChaCha12`], the 12-round ChaCha stream cipher with 96-bit nonces and an
//!   extended 192-bit nonce mode built on [`hchacha12`]
//!
//! Secrets held by these types are wiped on drop, and tag comparisons never
//! short-circuit.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// MAC implementations
pub mod mac;
pub use mac::{Mac, SipHash128};

// Stream cipher implementations
pub mod stream;
pub use stream::chacha::{chacha12_core, hchacha12, ChaCha12};
pub use stream::StreamCipher;

// Type system
pub mod types;
pub use types::{ChaCha12Compatible, Nonce, Tag};

// Key material is owned through the API crate's zeroizing container
pub use hydrocrypt_api::types::SecretBytes;
