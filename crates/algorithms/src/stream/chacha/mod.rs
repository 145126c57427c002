//! ChaCha12 permutation and its derived functions
//!
//! The permutation runs six double rounds. On top of it sit the raw block
//! function [`chacha12_core`], the subkey derivation [`hchacha12`] used by the
//! extended-nonce construction, and the [`ChaCha12`] stream cipher.

use byteorder::{ByteOrder, LittleEndian};
use hydrocrypt_common::security::EphemeralSecret;
use hydrocrypt_params::utils::symmetric::{
    CHACHA12_BLOCK_SIZE, CHACHA12_KEY_SIZE, CHACHA12_ROUNDS, CHACHA_SIGMA,
    HCHACHA12_INPUT_SIZE, HCHACHA12_OUTPUT_SIZE,
};

pub mod chacha12;

// Re-export for convenience
pub use chacha12::ChaCha12;

/// The ChaCha quarter round function
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Apply the 12-round permutation in place
fn permute(state: &mut [u32; 16]) {
    for _ in 0..CHACHA12_ROUNDS / 2 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Lay out constants, key and the 16 input bytes as a ChaCha state
fn init_state(key: &[u8; CHACHA12_KEY_SIZE], input: &[u8; HCHACHA12_INPUT_SIZE]) -> [u32; 16] {
    let mut state = [0u32; 16];
    state[..4].copy_from_slice(&CHACHA_SIGMA);
    for i in 0..8 {
        state[4 + i] = LittleEndian::read_u32(&key[i * 4..]);
    }
    for i in 0..4 {
        state[12 + i] = LittleEndian::read_u32(&input[i * 4..]);
    }
    state
}

/// Permute `state` and add it back to itself, writing the block to `out`
pub(crate) fn block(state: &[u32; 16], out: &mut [u8; CHACHA12_BLOCK_SIZE]) {
    let mut working = EphemeralSecret::new(*state);
    permute(&mut working);

    for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
        LittleEndian::write_u32(chunk, working[i].wrapping_add(state[i]));
    }
}

/// Compute one raw ChaCha12 block
///
/// `input` fills state words 12..16, so it is usually a little-endian block
/// counter followed by a nonce, but any 16 bytes are accepted.
pub fn chacha12_core(
    key: &[u8; CHACHA12_KEY_SIZE],
    input: &[u8; HCHACHA12_INPUT_SIZE],
) -> [u8; CHACHA12_BLOCK_SIZE] {
    let state = EphemeralSecret::new(init_state(key, input));
    let mut out = [0u8; CHACHA12_BLOCK_SIZE];
    block(&state, &mut out);
    out
}

/// Derive a 32-byte subkey from `key` and a 16-byte nonce
///
/// Output is state words 0..4 and 12..16 after the permutation, without
/// the feed-forward addition.
pub fn hchacha12(
    key: &[u8; CHACHA12_KEY_SIZE],
    nonce: &[u8; HCHACHA12_INPUT_SIZE],
) -> [u8; HCHACHA12_OUTPUT_SIZE] {
    let mut state = EphemeralSecret::new(init_state(key, nonce));
    permute(&mut state);

    let mut out = [0u8; HCHACHA12_OUTPUT_SIZE];
    for i in 0..4 {
        LittleEndian::write_u32(&mut out[i * 4..], state[i]);
        LittleEndian::write_u32(&mut out[16 + i * 4..], state[12 + i]);
    }
    out
}
