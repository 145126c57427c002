//! Error handling for cryptographic primitives

use std::borrow::Cow;

use hydrocrypt_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The random source could not deliver bytes
    #[error("Random generation failed: {details}")]
    RandomGeneration {
        /// Message reported by the random source
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::RandomGeneration {
            details: err.to_string(),
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "primitive parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::RandomGeneration { details } => CoreError::RandomGenerationError {
                context: "primitive random source",
                message: details,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
