//! Type-safe wrappers for nonces and authentication tags
//!
//! Sizes are carried in the type, so a 12-byte nonce cannot be handed to
//! code expecting a 24-byte one, and tags compare in constant time.

pub mod nonce;
pub mod tag;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use nonce::{ChaCha12Compatible, Nonce};
pub use tag::Tag;
