//! # hydrocrypt
//!
//! A small toolkit of keyed SipHash-128, the ChaCha12 stream cipher and the
//! SecretBox authenticated-encryption construction built on both.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hydrocrypt = "0.3"
//! ```
//!
//! ```
//! use hydrocrypt::prelude::*;
//!
//! let key = SecretBox::generate_key(&mut rand::rngs::OsRng)?;
//! let sbox = SecretBox::new(&key, b"mailbox1");
//! let sealed = sbox.encrypt(b"hello", 42)?;
//! assert_eq!(sbox.decrypt(&sealed, 42)?, b"hello");
//! # Ok::<(), hydrocrypt::prelude::Error>(())
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): SipHash-128 and ChaCha12 primitives
//! - `symmetric` (default): SecretBox, implies `algorithms`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `hydrocrypt-api`: public error type and secret byte containers
//! - `hydrocrypt-common`: zeroizing buffers for intermediate secrets
//! - `hydrocrypt-internal`: constant-time comparison and counter helpers
//! - `hydrocrypt-params`: algorithm constants
//! - `hydrocrypt-algorithms`: SipHash-128, ChaCha12, HChaCha12
//! - `hydrocrypt-symmetric`: SecretBox

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use hydrocrypt_api as api;
pub use hydrocrypt_common as common;
pub use hydrocrypt_internal as internal;
pub use hydrocrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use hydrocrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use hydrocrypt_symmetric as symmetric;

// Third-party crates that appear in public signatures
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for hydrocrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt, SecretBytes};

    // Re-export constant-time helpers
    pub use crate::internal::{ct_eq, ct_increment};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        chacha12_core, hchacha12, ChaCha12, Mac, Nonce, SipHash128, StreamCipher, Tag,
    };

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{SecretBox, SecretBoxKey, SymmetricCipher};

    // Re-export rand traits for RNG injection
    pub use rand::{CryptoRng, RngCore};
}
