//! Property-based and known-answer tests for ChaCha12 and XChaCha12

use hydrocrypt_algorithms::stream::chacha::hchacha12;
use hydrocrypt_algorithms::stream::ChaCha12;
use hydrocrypt_algorithms::types::Nonce;
use hydrocrypt_tests::unhex;
use hydrocrypt_tests::vectors::KEYSTREAMS;
use proptest::prelude::*;

#[test]
fn chacha12_keystream_vectors() {
    for v in KEYSTREAMS {
        let expected = unhex(v.keystream);
        let mut cipher = ChaCha12::from_slices(&unhex(v.key), &unhex(v.nonce)).unwrap();

        let mut out = vec![0u8; expected.len()];
        cipher.xor_key_stream(&mut out, &vec![0u8; expected.len()]).unwrap();
        assert_eq!(out, expected, "key {} nonce {}", v.key, v.nonce);
    }
}

proptest! {
    #[test]
    fn chacha12_process_twice_is_identity(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 0..300)
    ) {
        let nonce = Nonce::new(nonce);
        let mut buf = data.clone();
        ChaCha12::new(&key, &nonce).process(&mut buf);
        ChaCha12::new(&key, &nonce).process(&mut buf);
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn xchacha12_chunking_is_irrelevant(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        data in prop::collection::vec(any::<u8>(), 0..300),
        split in any::<prop::sample::Index>()
    ) {
        let nonce = Nonce::new(nonce);
        let mut whole = data.clone();
        ChaCha12::new(&key, &nonce).process(&mut whole);

        let at = split.index(data.len() + 1);
        let mut pieces = data.clone();
        let mut cipher = ChaCha12::new(&key, &nonce);
        let (head, tail) = pieces.split_at_mut(at);
        cipher.process(head);
        cipher.process(tail);

        prop_assert_eq!(pieces, whole);
    }

    #[test]
    fn xchacha12_is_chacha12_under_derived_subkey(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        len in 0usize..200
    ) {
        let mut prefix = [0u8; 16];
        prefix.copy_from_slice(&nonce[..16]);
        let subkey = hchacha12(&key, &prefix);
        let mut inner = [0u8; 12];
        inner[4..].copy_from_slice(&nonce[16..]);

        let mut extended = vec![0u8; len];
        ChaCha12::new(&key, &Nonce::new(nonce)).process(&mut extended);
        let mut plain = vec![0u8; len];
        ChaCha12::new(&subkey, &Nonce::new(inner)).process(&mut plain);

        prop_assert_eq!(extended, plain);
    }

    #[test]
    fn chacha12_seek_matches_skipping(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        block in 0u32..8
    ) {
        let nonce = Nonce::new(nonce);
        let mut skipped = vec![0u8; (block as usize + 1) * 64];
        ChaCha12::new(&key, &nonce).process(&mut skipped);

        let mut cipher = ChaCha12::new(&key, &nonce);
        cipher.seek(block);
        let mut sought = [0u8; 64];
        cipher.process(&mut sought);

        prop_assert_eq!(&sought[..], &skipped[block as usize * 64..]);
    }
}
