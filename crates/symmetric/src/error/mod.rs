//! Error handling for symmetric cryptographic operations
//!
//! Symmetric constructions report errors in the API error type; primitive
//! errors from `hydrocrypt-algorithms` are converted at the boundary.

// Re-export the primary API error system
pub use hydrocrypt_api::error::{validate, Error, Result, ResultExt};

use hydrocrypt_algorithms::error::Error as PrimitiveError;

/// Convert a PrimitiveError to an API Error
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    Error::from(err)
}

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }
}

// Already the right type, just pass through
impl<T> SymmetricResultExt<T> for core::result::Result<T, Error> {
    fn map_primitive_err(self) -> Result<T> {
        self
    }
}
