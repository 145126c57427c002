//! ChaCha12 stream cipher
//!
//! A 12-byte nonce selects the plain construction: the state holds the key,
//! a 32-bit block counter starting at zero, and the nonce. A 24-byte nonce
//! selects the extended construction: the first 16 nonce bytes and the key go
//! through [`hchacha12`] to derive a subkey, and the plain construction then
//! runs under that subkey with four zero bytes followed by the last 8 nonce
//! bytes as its nonce.

use byteorder::{ByteOrder, LittleEndian};
use hydrocrypt_common::security::{EphemeralSecret, SecretBuffer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{block, hchacha12};
use crate::error::{validate, Result};
use crate::types::{ChaCha12Compatible, Nonce};

pub use hydrocrypt_params::utils::symmetric::{
    CHACHA12_BLOCK_SIZE, CHACHA12_KEY_SIZE, CHACHA12_NONCE_SIZE, XCHACHA12_NONCE_SIZE,
};
use hydrocrypt_params::utils::symmetric::{CHACHA_SIGMA, HCHACHA12_INPUT_SIZE};

/// ChaCha12 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha12 {
    /// The key schedule
    state: [u32; 16],
    /// Keystream buffer
    buffer: [u8; CHACHA12_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Counter of the next block to generate
    counter: u32,
}

impl ChaCha12 {
    /// Creates a new ChaCha12 instance from a key and a 12- or 24-byte nonce
    pub fn new<const N: usize>(key: &[u8; CHACHA12_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: ChaCha12Compatible,
    {
        let key_buf = SecretBuffer::new(*key);
        Self::init(&key_buf, nonce.as_ref(), <Nonce<N> as ChaCha12Compatible>::EXTENDED)
    }

    /// Creates a new ChaCha12 instance from unsized slices
    ///
    /// The key must be 32 bytes and the nonce either 12 or 24 bytes.
    pub fn from_slices(key: &[u8], nonce: &[u8]) -> Result<Self> {
        validate::length("ChaCha12 key", key.len(), CHACHA12_KEY_SIZE)?;
        validate::parameter(
            nonce.len() == CHACHA12_NONCE_SIZE || nonce.len() == XCHACHA12_NONCE_SIZE,
            "nonce",
            "ChaCha12 nonce must be 12 or 24 bytes",
        )?;

        let mut key_buf = SecretBuffer::<CHACHA12_KEY_SIZE>::zeroed();
        key_buf.as_mut().copy_from_slice(key);
        Ok(Self::init(&key_buf, nonce, nonce.len() == XCHACHA12_NONCE_SIZE))
    }

    /// Set up the state; `nonce` is 24 bytes when `extended` is set, 12 otherwise
    fn init(key: &SecretBuffer<CHACHA12_KEY_SIZE>, nonce: &[u8], extended: bool) -> Self {
        let mut inner = [0u8; CHACHA12_NONCE_SIZE];

        if extended {
            let mut prefix = [0u8; HCHACHA12_INPUT_SIZE];
            prefix.copy_from_slice(&nonce[..HCHACHA12_INPUT_SIZE]);
            let subkey = SecretBuffer::new(hchacha12(key.as_array(), &prefix));

            inner[4..].copy_from_slice(&nonce[HCHACHA12_INPUT_SIZE..]);
            Self::with_key_and_nonce(&subkey, &inner)
        } else {
            inner.copy_from_slice(nonce);
            Self::with_key_and_nonce(key, &inner)
        }
    }

    fn with_key_and_nonce(
        key: &SecretBuffer<CHACHA12_KEY_SIZE>,
        nonce: &[u8; CHACHA12_NONCE_SIZE],
    ) -> Self {
        let mut state = [0u32; 16];

        // "expand 32-byte k" in little-endian
        state[..4].copy_from_slice(&CHACHA_SIGMA);

        // Key (8 words)
        let key_bytes = key.as_ref();
        for i in 0..8 {
            state[4 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
        }

        // Counter word is filled per block; nonce takes the last 3 words
        state[13] = LittleEndian::read_u32(&nonce[0..4]);
        state[14] = LittleEndian::read_u32(&nonce[4..8]);
        state[15] = LittleEndian::read_u32(&nonce[8..12]);

        Self {
            state,
            buffer: [0; CHACHA12_BLOCK_SIZE],
            position: CHACHA12_BLOCK_SIZE, // Force initial keystream generation
            counter: 0,
        }
    }

    /// Generate a block of keystream
    fn generate_keystream(&mut self) {
        let mut input = EphemeralSecret::new(self.state);
        input[12] = self.counter;
        block(&input, &mut self.buffer);

        // The counter wraps after 2^32 blocks
        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }

    /// Encrypt or decrypt data in place
    ///
    /// Consecutive calls continue the same keystream, so splitting a message
    /// into pieces gives the same result as processing it at once.
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.position >= CHACHA12_BLOCK_SIZE {
                self.generate_keystream();
            }

            *byte ^= self.buffer[self.position];
            self.position += 1;
        }
    }

    /// XOR `src` with the keystream into the front of `dst`
    ///
    /// Bytes of `dst` past `src.len()` are left untouched. Fails without
    /// consuming keystream when `dst` is shorter than `src`.
    pub fn xor_key_stream(&mut self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        validate::min_length("ChaCha12 destination", dst.len(), src.len())?;

        let out = &mut dst[..src.len()];
        out.copy_from_slice(src);
        self.process(out);
        Ok(())
    }

    /// Generate raw keystream, starting at the next block boundary
    ///
    /// Any unused bytes of the current block are discarded.
    pub fn keystream(&mut self, output: &mut [u8]) {
        output.zeroize();
        self.position = CHACHA12_BLOCK_SIZE;
        self.process(output);
    }

    /// Position the keystream so the next generated block is `block`
    pub fn seek(&mut self, block: u32) {
        self.counter = block;
        self.buffer.zeroize();
        self.position = CHACHA12_BLOCK_SIZE;
    }

    /// Return to the start of the keystream
    pub fn reset(&mut self) {
        self.seek(0);
    }

    /// Counter of the next block the cipher will generate
    pub fn block_counter(&self) -> u32 {
        self.counter
    }
}
