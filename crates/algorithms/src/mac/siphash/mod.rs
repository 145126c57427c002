//! Keyed SipHash-128 with an 8-byte context
//!
//! SipHash-2-4 widened to a 128-bit output. The context is absorbed as the
//! first message block when the key is set and is not counted in the message
//! length that finalization mixes in, so two states keyed with the same key but
//! different contexts behave like independent functions.
//!
//! The state keeps a copy of its post-keying accumulator, which makes
//! [`SipHash128::reset`] as cheap as copying four words.

use core::fmt;

use byteorder::{ByteOrder, LittleEndian};
use hydrocrypt_api::types::SecretBytes;
use hydrocrypt_common::security::{EphemeralSecret, SecretBuffer};
use hydrocrypt_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::mac::Mac;
use crate::types::Tag;

pub use hydrocrypt_params::utils::mac::{
    SIPHASH128_BLOCK_SIZE, SIPHASH128_CONTEXT_SIZE, SIPHASH128_KEY_SIZE, SIPHASH128_TAG_SIZE,
};
use hydrocrypt_params::utils::mac::{
    SIPHASH128_FIRST_TWEAK, SIPHASH128_INIT, SIPHASH128_SECOND_TWEAK, SIPHASH_C_ROUNDS,
    SIPHASH_D_ROUNDS,
};

/// Streaming SipHash-128 state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SipHash128 {
    /// Running accumulator
    v: [u64; 4],
    /// Accumulator right after keying and absorbing the context
    initial: [u64; 4],
    /// Pending bytes of an incomplete block
    buf: [u8; SIPHASH128_BLOCK_SIZE],
    buf_len: usize,
    /// Message length modulo 256
    len: u8,
}

#[inline(always)]
fn sip_round(v: &mut [u64; 4]) {
    v[0] = v[0].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(13);
    v[1] ^= v[0];
    v[0] = v[0].rotate_left(32);

    v[2] = v[2].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(16);
    v[3] ^= v[2];

    v[0] = v[0].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(21);
    v[3] ^= v[0];

    v[2] = v[2].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(17);
    v[1] ^= v[2];
    v[2] = v[2].rotate_left(32);
}

#[inline(always)]
fn compress(v: &mut [u64; 4], m: u64) {
    v[3] ^= m;
    for _ in 0..SIPHASH_C_ROUNDS {
        sip_round(v);
    }
    v[0] ^= m;
}

impl SipHash128 {
    /* ------------------------------------------------------------------ */
    /*                         Construction helpers                       */
    /* ------------------------------------------------------------------ */

    /// Key a new state and absorb `context`
    pub fn new(
        context: &[u8; SIPHASH128_CONTEXT_SIZE],
        key: &[u8; SIPHASH128_KEY_SIZE],
    ) -> Self {
        let k0 = LittleEndian::read_u64(&key[..8]);
        let k1 = LittleEndian::read_u64(&key[8..]);

        let mut initial = [
            k0 ^ SIPHASH128_INIT[0],
            k1 ^ SIPHASH128_INIT[1],
            k0 ^ SIPHASH128_INIT[2],
            k1 ^ SIPHASH128_INIT[3],
        ];
        compress(&mut initial, LittleEndian::read_u64(context));

        Self {
            v: initial,
            initial,
            buf: [0u8; SIPHASH128_BLOCK_SIZE],
            buf_len: 0,
            len: 0,
        }
    }

    /// Key a new state from unsized slices
    ///
    /// Fails when the context is not 8 bytes or the key is not 16 bytes.
    pub fn from_slices(context: &[u8], key: &[u8]) -> Result<Self> {
        validate::length("SipHash128 context", context.len(), SIPHASH128_CONTEXT_SIZE)?;
        validate::length("SipHash128 key", key.len(), SIPHASH128_KEY_SIZE)?;

        let mut ctx = [0u8; SIPHASH128_CONTEXT_SIZE];
        ctx.copy_from_slice(context);
        let mut k = SecretBuffer::<SIPHASH128_KEY_SIZE>::zeroed();
        k.as_mut().copy_from_slice(key);

        Ok(Self::new(&ctx, k.as_array()))
    }

    /// Generate a fresh random key
    pub fn generate_key<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> Result<SecretBytes<SIPHASH128_KEY_SIZE>> {
        let mut key = EphemeralSecret::new([0u8; SIPHASH128_KEY_SIZE]);
        rng.try_fill_bytes(&mut key[..])?;
        Ok(SecretBytes::new(*key))
    }

    /* ------------------------------------------------------------------ */
    /*                            Streaming API                           */
    /* ------------------------------------------------------------------ */

    /// Absorb `data`; chunking never changes the resulting tag
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.len = self.len.wrapping_add(data.len() as u8);

        let mut data = data;
        if self.buf_len > 0 {
            let take = (SIPHASH128_BLOCK_SIZE - self.buf_len).min(data.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
            self.buf_len += take;
            data = &data[take..];

            if self.buf_len < SIPHASH128_BLOCK_SIZE {
                return self;
            }
            compress(&mut self.v, LittleEndian::read_u64(&self.buf));
            self.buf_len = 0;
        }

        let mut blocks = data.chunks_exact(SIPHASH128_BLOCK_SIZE);
        for block in &mut blocks {
            compress(&mut self.v, LittleEndian::read_u64(block));
        }

        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
        self
    }

    /// Produce the tag over everything absorbed so far
    ///
    /// Works on a copy of the accumulator; the state can still be updated
    /// afterwards.
    pub fn finalize(&self) -> Tag<SIPHASH128_TAG_SIZE> {
        let mut v = EphemeralSecret::new(self.v);

        let mut last = EphemeralSecret::new([0u8; SIPHASH128_BLOCK_SIZE]);
        last[..self.buf_len].copy_from_slice(&self.buf[..self.buf_len]);
        last[SIPHASH128_BLOCK_SIZE - 1] = self.len;
        compress(&mut v, LittleEndian::read_u64(&last[..]));

        let mut tag = [0u8; SIPHASH128_TAG_SIZE];

        v[2] ^= SIPHASH128_FIRST_TWEAK;
        for _ in 0..SIPHASH_D_ROUNDS {
            sip_round(&mut v);
        }
        LittleEndian::write_u64(&mut tag[..8], v[0] ^ v[1] ^ v[2] ^ v[3]);

        v[1] ^= SIPHASH128_SECOND_TWEAK;
        for _ in 0..SIPHASH_D_ROUNDS {
            sip_round(&mut v);
        }
        LittleEndian::write_u64(&mut tag[8..], v[0] ^ v[1] ^ v[2] ^ v[3]);

        Tag::new(tag)
    }

    /// Forget the absorbed message; key and context stay in effect
    pub fn reset(&mut self) {
        self.v = self.initial;
        self.buf.zeroize();
        self.buf_len = 0;
        self.len = 0;
    }

    /* ------------------------------------------------------------------ */
    /*                        Convenience wrappers                         */
    /* ------------------------------------------------------------------ */

    /// One-shot tag computation
    pub fn mac(
        message: &[u8],
        context: &[u8; SIPHASH128_CONTEXT_SIZE],
        key: &[u8; SIPHASH128_KEY_SIZE],
    ) -> Tag<SIPHASH128_TAG_SIZE> {
        let mut state = Self::new(context, key);
        state.update(message);
        state.finalize()
    }

    /// Check `tag` against the tag of `message` in constant time
    ///
    /// A tag of the wrong length never verifies.
    pub fn verify(
        tag: &[u8],
        message: &[u8],
        context: &[u8; SIPHASH128_CONTEXT_SIZE],
        key: &[u8; SIPHASH128_KEY_SIZE],
    ) -> bool {
        let expected = Self::mac(message, context, key);
        ct_eq(expected.as_ref(), tag)
    }
}

impl Mac for SipHash128 {
    type Output = Tag<SIPHASH128_TAG_SIZE>;

    fn update(&mut self, data: &[u8]) -> &mut Self {
        SipHash128::update(self, data)
    }

    fn finalize(&self) -> Self::Output {
        SipHash128::finalize(self)
    }

    fn reset(&mut self) {
        SipHash128::reset(self)
    }
}

impl fmt::Debug for SipHash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SipHash128").finish_non_exhaustive()
    }
}
