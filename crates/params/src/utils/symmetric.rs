//! Constants for the stream cipher and the secretbox construction

/// ChaCha12 key size in bytes
pub const CHACHA12_KEY_SIZE: usize = 32;

/// ChaCha12 nonce size in bytes (96-bit nonce mode)
pub const CHACHA12_NONCE_SIZE: usize = 12;

/// XChaCha12 nonce size in bytes (192-bit extended nonce mode)
pub const XCHACHA12_NONCE_SIZE: usize = 24;

/// ChaCha12 block size in bytes
pub const CHACHA12_BLOCK_SIZE: usize = 64;

/// Number of ChaCha rounds; each double round is a column plus a diagonal round
pub const CHACHA12_ROUNDS: usize = 12;

/// HChaCha12 input size in bytes
pub const HCHACHA12_INPUT_SIZE: usize = 16;

/// HChaCha12 output size in bytes
pub const HCHACHA12_OUTPUT_SIZE: usize = 32;

/// "expand 32-byte k" as little-endian words
pub const CHACHA_SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Secretbox root key size in bytes
pub const SECRETBOX_KEY_SIZE: usize = 32;

/// Secretbox context size in bytes
pub const SECRETBOX_CONTEXT_SIZE: usize = 8;

/// Number of nonce bytes transmitted in a secretbox header
pub const SECRETBOX_NONCE_HEADER_SIZE: usize = 20;

/// Number of random bytes mixed into every secretbox nonce
pub const SECRETBOX_RANDOM_SIZE: usize = 8;

/// Secretbox MAC size in bytes
pub const SECRETBOX_MAC_SIZE: usize = 16;

/// Total secretbox ciphertext overhead in bytes
pub const SECRETBOX_HEADER_SIZE: usize = SECRETBOX_NONCE_HEADER_SIZE + SECRETBOX_MAC_SIZE;
