//! Property-based and known-answer tests for SecretBox

use hydrocrypt_symmetric::secretbox::SECRETBOX_HEADER_SIZE;
use hydrocrypt_symmetric::{Error, SecretBox, SecretBoxKey};
use hydrocrypt_tests::rng::{FailingRng, FixedRng};
use hydrocrypt_tests::unhex;
use hydrocrypt_tests::vectors::SECRETBOXES;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn secretbox(key: [u8; 32], context: &[u8; 8]) -> SecretBox {
    SecretBox::new(&SecretBoxKey::new(key), context)
}

#[test]
fn secretbox_vectors() {
    for v in SECRETBOXES {
        let sbox = SecretBox::from_slices(&unhex(v.key), v.context).unwrap();
        let msg = unhex(v.message);

        let sealed = sbox
            .encrypt_with_rng(&msg, v.id, &mut FixedRng(v.random))
            .unwrap();
        assert_eq!(hex::encode(&sealed), v.ciphertext, "id {}", v.id);
        assert_eq!(sbox.decrypt(&sealed, v.id).unwrap(), msg);
    }
}

#[test]
fn secretbox_failing_rng_is_an_error() {
    let sbox = secretbox([7u8; 32], b"rngfails");
    assert!(matches!(
        sbox.encrypt_with_rng(b"msg", 1, &mut FailingRng),
        Err(Error::RandomGenerationError { .. })
    ));
}

proptest! {
    #[test]
    fn secretbox_roundtrip(
        key in any::<[u8; 32]>(),
        context in any::<[u8; 8]>(),
        id in any::<u64>(),
        seed in any::<u64>(),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let sbox = secretbox(key, &context);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let sealed = sbox.encrypt_with_rng(&msg, id, &mut rng).unwrap();
        prop_assert_eq!(sealed.len(), msg.len() + SECRETBOX_HEADER_SIZE);
        prop_assert_eq!(sbox.decrypt(&sealed, id).unwrap(), msg);
    }

    #[test]
    fn secretbox_any_bit_flip_is_rejected(
        key in any::<[u8; 32]>(),
        msg in prop::collection::vec(any::<u8>(), 0..48),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let sbox = secretbox(key, b"bitflips");
        let mut sealed = sbox.encrypt_with_rng(&msg, 11, &mut FixedRng(9)).unwrap();
        let at = position.index(sealed.len());
        sealed[at] ^= 1 << bit;

        let err = sbox.decrypt(&sealed, 11).unwrap_err();
        prop_assert!(err.is_authentication_failure());
    }

    #[test]
    fn secretbox_binds_id_and_context(
        key in any::<[u8; 32]>(),
        id in any::<u64>(),
        other_id in any::<u64>(),
        msg in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        prop_assume!(id != other_id);
        let sbox = secretbox(key, b"contextA");
        let sealed = sbox.encrypt_with_rng(&msg, id, &mut FixedRng(1)).unwrap();

        prop_assert!(sbox.decrypt(&sealed, other_id).is_err());
        prop_assert!(secretbox(key, b"contextB").decrypt(&sealed, id).is_err());
    }

    #[test]
    fn secretbox_is_deterministic_for_fixed_randomness(
        key in any::<[u8; 32]>(),
        id in any::<u64>(),
        random in any::<u8>(),
        msg in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let sbox = secretbox(key, b"determin");
        let a = sbox.encrypt_with_rng(&msg, id, &mut FixedRng(random)).unwrap();
        let b = sbox.encrypt_with_rng(&msg, id, &mut FixedRng(random)).unwrap();
        prop_assert_eq!(a, b);
    }
}
