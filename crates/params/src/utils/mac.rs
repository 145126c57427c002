//! Constants for SipHash-128

/// SipHash-128 key size in bytes
pub const SIPHASH128_KEY_SIZE: usize = 16;

/// SipHash-128 context size in bytes
pub const SIPHASH128_CONTEXT_SIZE: usize = 8;

/// SipHash-128 tag size in bytes
pub const SIPHASH128_TAG_SIZE: usize = 16;

/// SipHash-128 block size in bytes
pub const SIPHASH128_BLOCK_SIZE: usize = 8;

/// Compression rounds per message block (c)
pub const SIPHASH_C_ROUNDS: usize = 2;

/// Finalization rounds per output half (d)
pub const SIPHASH_D_ROUNDS: usize = 4;

/// Initialization constants; the second one is pre-tweaked for 128-bit output
pub const SIPHASH128_INIT: [u64; 4] = [
    0x736f_6d65_7073_6575,
    0x646f_7261_6e64_6f6d ^ 0xee,
    0x6c79_6765_6e65_7261,
    0x7465_6462_7974_6573,
];

/// XORed into v2 before the first output half
pub const SIPHASH128_FIRST_TWEAK: u64 = 0xee;

/// XORed into v1 before the second output half
pub const SIPHASH128_SECOND_TWEAK: u64 = 0xdd;
