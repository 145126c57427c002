//! SecretBox authenticated encryption
//!
//! A `SecretBox` binds a 32-byte root key to an 8-byte context. Every message
//! is sealed under a caller-chosen 64-bit message id, and the same id, context
//! and key must be presented to open it.
//!
//! Sealing derives three subkeys from the root key and the id with one raw
//! ChaCha12 block. The nonce is synthetic: a SipHash-128 tag of the plaintext
//! and 8 random bytes are mixed through HChaCha12 and truncated to 20 bytes,
//! so a weak or repeating random source degrades to deterministic encryption
//! rather than nonce reuse. The body is XChaCha12 under that nonce, and a
//! second SipHash-128 tag authenticates header and body.
//!
//! # Wire format
//!
//! ```text
//! [0:20]  nonce header
//! [20:36] SipHash-128 tag over header || body
//! [36:]   ciphertext body, same length as the plaintext
//! ```
//!
//! # Examples
//!
//! ```
//! use hydrocrypt_symmetric::{Result, SecretBox};
//!
//! fn seal_and_open() -> Result<()> {
//!     let key = SecretBox::generate_key(&mut rand::rngs::OsRng)?;
//!     let sbox = SecretBox::new(&key, b"examples");
//!
//!     let sealed = sbox.encrypt(b"attack at dawn", 1)?;
//!     assert_eq!(sbox.decrypt(&sealed, 1)?, b"attack at dawn");
//!     assert!(sbox.decrypt(&sealed, 2).is_err());
//!     Ok(())
//! }
//! # seal_and_open().unwrap();
//! ```

use core::fmt;

use hydrocrypt_algorithms::mac::SipHash128;
use hydrocrypt_algorithms::stream::chacha::{chacha12_core, hchacha12};
use hydrocrypt_algorithms::stream::ChaCha12;
use hydrocrypt_algorithms::types::Nonce;
use hydrocrypt_api::types::SecretBytes;
use hydrocrypt_common::security::{EphemeralSecret, SecretBuffer};
use hydrocrypt_internal::constant_time::ct_eq;
use hydrocrypt_params::utils::mac::{SIPHASH128_KEY_SIZE, SIPHASH128_TAG_SIZE};
use hydrocrypt_params::utils::symmetric::{
    CHACHA12_KEY_SIZE, HCHACHA12_INPUT_SIZE, XCHACHA12_NONCE_SIZE,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::SymmetricCipher;
use crate::error::{validate, Error, Result, ResultExt, SymmetricResultExt};

pub use hydrocrypt_params::utils::symmetric::{
    SECRETBOX_CONTEXT_SIZE, SECRETBOX_HEADER_SIZE, SECRETBOX_KEY_SIZE, SECRETBOX_MAC_SIZE,
    SECRETBOX_NONCE_HEADER_SIZE, SECRETBOX_RANDOM_SIZE,
};

/// Root key of a [`SecretBox`]
pub type SecretBoxKey = SecretBytes<SECRETBOX_KEY_SIZE>;

const NAME: &str = "SecretBox";

/// Per-message keys derived from the root key and message id
struct Subkeys {
    mac: SecretBuffer<SIPHASH128_KEY_SIZE>,
    nonce: SecretBuffer<SIPHASH128_KEY_SIZE>,
    enc: SecretBuffer<CHACHA12_KEY_SIZE>,
}

impl Subkeys {
    fn derive(key: &[u8; SECRETBOX_KEY_SIZE], id: u64) -> Self {
        let mut input = [0u8; HCHACHA12_INPUT_SIZE];
        input[..8].copy_from_slice(&id.to_le_bytes());
        let block = EphemeralSecret::new(chacha12_core(key, &input));

        let mut keys = Self {
            mac: SecretBuffer::zeroed(),
            nonce: SecretBuffer::zeroed(),
            enc: SecretBuffer::zeroed(),
        };
        keys.mac.as_mut().copy_from_slice(&block[..16]);
        keys.nonce.as_mut().copy_from_slice(&block[16..32]);
        keys.enc.as_mut().copy_from_slice(&block[32..]);
        keys
    }

    fn cipher(&self, header: &[u8]) -> ChaCha12 {
        let mut nonce = Nonce::<XCHACHA12_NONCE_SIZE>::zeroed();
        nonce[..SECRETBOX_NONCE_HEADER_SIZE].copy_from_slice(header);
        ChaCha12::new(self.enc.as_array(), &nonce)
    }

    fn tag(
        &self,
        context: &[u8; SECRETBOX_CONTEXT_SIZE],
        header: &[u8],
        body: &[u8],
    ) -> [u8; SIPHASH128_TAG_SIZE] {
        let mut mac = SipHash128::new(context, self.mac.as_array());
        mac.update(header).update(body);
        mac.finalize().into_bytes()
    }
}

/// Authenticated encryption bound to a root key and an 8-byte context
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBox {
    key: SecretBuffer<SECRETBOX_KEY_SIZE>,
    context: [u8; SECRETBOX_CONTEXT_SIZE],
}

impl SecretBox {
    /// Bind `key` to `context`
    pub fn new(key: &SecretBoxKey, context: &[u8; SECRETBOX_CONTEXT_SIZE]) -> Self {
        Self {
            key: SecretBuffer::new(*key.as_array()),
            context: *context,
        }
    }

    /// Bind a key and context given as unsized slices
    pub fn from_slices(key: &[u8], context: &[u8]) -> Result<Self> {
        let key = SecretBoxKey::from_slice(key).with_context("SecretBox key")?;
        validate::length("SecretBox context", context.len(), SECRETBOX_CONTEXT_SIZE)?;

        let mut ctx = [0u8; SECRETBOX_CONTEXT_SIZE];
        ctx.copy_from_slice(context);
        Ok(Self::new(&key, &ctx))
    }

    /// Generate a fresh root key
    pub fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<SecretBoxKey> {
        SecretBoxKey::random(rng)
    }

    /// Ciphertext length for a plaintext of `len` bytes
    pub fn ciphertext_len(len: usize) -> usize {
        len + SECRETBOX_HEADER_SIZE
    }

    /// Seal `msg` into the front of `out` and return the number of bytes written
    ///
    /// `out` must hold at least `msg.len() + 36` bytes. If the random source
    /// fails, the error is returned and `out` is left untouched.
    pub fn encrypt_into<R: RngCore + CryptoRng>(
        &self,
        out: &mut [u8],
        msg: &[u8],
        id: u64,
        rng: &mut R,
    ) -> Result<usize> {
        let total = Self::ciphertext_len(msg.len());
        validate::min_length("SecretBox ciphertext buffer", out.len(), total)?;

        let keys = Subkeys::derive(self.key.as_array(), id);

        // tag || random || zero padding, then whitened into a nonce
        let mut seed = EphemeralSecret::new([0u8; 32]);
        let tag = SipHash128::mac(msg, &self.context, keys.nonce.as_array());
        seed[..SIPHASH128_TAG_SIZE].copy_from_slice(tag.as_ref());

        let random = &mut seed[SIPHASH128_TAG_SIZE..SIPHASH128_TAG_SIZE + SECRETBOX_RANDOM_SIZE];
        if let Err(err) = rng.try_fill_bytes(random) {
            debug!(id, error = %err, "secretbox: random source failed");
            return Err(Error::from(err));
        }

        let mut header = EphemeralSecret::new(hchacha12(&seed, &[0u8; HCHACHA12_INPUT_SIZE]));
        header[SECRETBOX_NONCE_HEADER_SIZE..].zeroize();

        let (head, rest) = out[..total].split_at_mut(SECRETBOX_NONCE_HEADER_SIZE);
        let (mac, body) = rest.split_at_mut(SECRETBOX_MAC_SIZE);
        head.copy_from_slice(&header[..SECRETBOX_NONCE_HEADER_SIZE]);

        keys.cipher(head)
            .xor_key_stream(body, msg)
            .map_primitive_err()?;
        mac.copy_from_slice(&keys.tag(&self.context, head, body));

        trace!(id, len = msg.len(), "secretbox: sealed message");
        Ok(total)
    }

    /// Seal `msg` with randomness from `rng`
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        msg: &[u8],
        id: u64,
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let mut out = vec![0u8; Self::ciphertext_len(msg.len())];
        self.encrypt_into(&mut out, msg, id, rng)?;
        Ok(out)
    }

    /// Seal `msg` with randomness from the operating system
    pub fn encrypt(&self, msg: &[u8], id: u64) -> Result<Vec<u8>> {
        self.encrypt_with_rng(msg, id, &mut OsRng)
    }

    /// Open `ciphertext` into the front of `out` and return the plaintext length
    ///
    /// Nothing is written to `out` unless the tag verifies. Any ciphertext
    /// shorter than the 36-byte header fails authentication.
    pub fn decrypt_into(&self, out: &mut [u8], ciphertext: &[u8], id: u64) -> Result<usize> {
        if ciphertext.len() < SECRETBOX_HEADER_SIZE {
            debug!(id, len = ciphertext.len(), "secretbox: ciphertext shorter than header");
            return Err(Error::AuthenticationFailed { context: NAME });
        }
        let msg_len = ciphertext.len() - SECRETBOX_HEADER_SIZE;
        validate::min_length("SecretBox plaintext buffer", out.len(), msg_len)?;

        let (head, rest) = ciphertext.split_at(SECRETBOX_NONCE_HEADER_SIZE);
        let (received, body) = rest.split_at(SECRETBOX_MAC_SIZE);

        let keys = Subkeys::derive(self.key.as_array(), id);
        let expected = keys.tag(&self.context, head, body);

        let valid = ct_eq(expected, received);
        if !valid {
            debug!(id, len = ciphertext.len(), "secretbox: authentication failed");
        }
        validate::authentication(valid, NAME)?;

        keys.cipher(head)
            .xor_key_stream(&mut out[..msg_len], body)
            .map_primitive_err()?;

        trace!(id, len = msg_len, "secretbox: opened message");
        Ok(msg_len)
    }

    /// Open `ciphertext` and return the plaintext
    pub fn decrypt(&self, ciphertext: &[u8], id: u64) -> Result<Vec<u8>> {
        let mut out = vec![0u8; ciphertext.len().saturating_sub(SECRETBOX_HEADER_SIZE)];
        self.decrypt_into(&mut out, ciphertext, id)?;
        Ok(out)
    }
}

impl SymmetricCipher for SecretBox {
    type Key = SecretBoxKey;
    type Context = [u8; SECRETBOX_CONTEXT_SIZE];

    fn new(key: &Self::Key, context: &Self::Context) -> Result<Self> {
        Ok(SecretBox::new(key, context))
    }

    fn name() -> &'static str {
        NAME
    }
}

impl fmt::Debug for SecretBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBox")
            .field("context", &String::from_utf8_lossy(&self.context))
            .finish_non_exhaustive()
    }
}
