//! Symmetric cipher traits for hydrocrypt-symmetric

use crate::error::Result;

/// Common trait for symmetric encryption constructions
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key;

    /// Public domain-separation input bound to the key, such as a context label
    type Context;

    /// Creates a new cipher instance with the given key and context
    fn new(key: &Self::Key, context: &Self::Context) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}
