//! Message authentication codes
//!
//! Only keyed SipHash-128 lives here. Its tags are bound to an 8-byte
//! context in addition to the key, so tags computed under different
//! contexts never verify against each other.

pub mod siphash;

pub use siphash::SipHash128;

/// Common trait for streaming MAC implementations
pub trait Mac {
    /// Authentication tag produced by the MAC
    type Output;

    /// Absorb more message bytes
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Compute the tag over everything absorbed so far
    ///
    /// Finalizing does not consume the state; callers may keep appending.
    fn finalize(&self) -> Self::Output;

    /// Return to the state right after keying
    fn reset(&mut self);
}
