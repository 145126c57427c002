//! Stream cipher implementations
//!
//! # Available Stream Ciphers
//!
//! - ChaCha12: the 12-round ChaCha variant, with 96-bit and 192-bit nonces
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with the
//! same key. Reusing a nonce with the same key completely breaks the security
//! of the cipher.

/// ChaCha family of stream cipher implementations
pub mod chacha;

// Re-export commonly used types
pub use chacha::chacha12::{
    ChaCha12, CHACHA12_BLOCK_SIZE, CHACHA12_KEY_SIZE, CHACHA12_NONCE_SIZE, XCHACHA12_NONCE_SIZE,
};

use crate::error::{Error, Result};

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// The key size in bytes
    const KEY_SIZE: usize;

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// The internal block size in bytes (if applicable)
    const BLOCK_SIZE: usize;

    /// Process data in place (encrypts for encryption, decrypts for decryption)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// Reset the cipher to its initial state
    fn reset(&mut self) -> Result<()>;

    /// Seek to a specific block in the keystream
    fn seek(&mut self, position: u64) -> Result<()>;
}

// Implement StreamCipher for ChaCha12
impl StreamCipher for ChaCha12 {
    const KEY_SIZE: usize = CHACHA12_KEY_SIZE;
    const NONCE_SIZE: usize = CHACHA12_NONCE_SIZE;
    const BLOCK_SIZE: usize = CHACHA12_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        ChaCha12::process(self, data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        ChaCha12::keystream(self, output);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        ChaCha12::reset(self);
        Ok(())
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        let block = u32::try_from(position).map_err(|_| {
            Error::param("position", "ChaCha12 block counter is limited to 32 bits")
        })?;
        ChaCha12::seek(self, block);
        Ok(())
    }
}
