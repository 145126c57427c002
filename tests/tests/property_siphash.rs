//! Property-based tests for keyed SipHash-128

use hydrocrypt_algorithms::mac::siphash::SipHash128;
use hydrocrypt_algorithms::Mac;
use proptest::prelude::*;

proptest! {
    #[test]
    fn siphash128_streaming_matches_one_shot(
        key in any::<[u8; 16]>(),
        context in any::<[u8; 8]>(),
        data in prop::collection::vec(any::<u8>(), 0..300),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..6)
    ) {
        let expected = SipHash128::mac(&data, &context, &key);

        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
        points.sort_unstable();

        let mut state = SipHash128::new(&context, &key);
        let mut start = 0;
        for point in points {
            state.update(&data[start..point]);
            start = point;
        }
        state.update(&data[start..]);

        prop_assert_eq!(state.finalize(), expected);
    }

    #[test]
    fn siphash128_is_deterministic_and_verifies(
        key in any::<[u8; 16]>(),
        context in any::<[u8; 8]>(),
        data in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        let a = SipHash128::mac(&data, &context, &key);
        let b = SipHash128::mac(&data, &context, &key);
        prop_assert_eq!(&a, &b);
        prop_assert!(SipHash128::verify(a.as_ref(), &data, &context, &key));
    }

    #[test]
    fn siphash128_tag_flip_fails_verification(
        key in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..64),
        byte in 0usize..16,
        bit in 0u8..8
    ) {
        let mut tag = SipHash128::mac(&data, b"proptest", &key).into_bytes();
        tag[byte] ^= 1 << bit;
        prop_assert!(!SipHash128::verify(&tag, &data, b"proptest", &key));
    }

    #[test]
    fn siphash128_reset_restores_keyed_state(
        key in any::<[u8; 16]>(),
        junk in prop::collection::vec(any::<u8>(), 0..64),
        data in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut state = SipHash128::new(b"resetctx", &key);
        Mac::update(&mut state, &junk);
        Mac::reset(&mut state);
        Mac::update(&mut state, &data);
        prop_assert_eq!(Mac::finalize(&state), SipHash128::mac(&data, b"resetctx", &key));
    }
}
