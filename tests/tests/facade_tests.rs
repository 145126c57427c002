//! The facade crate exposes the whole toolkit through its prelude

use hydrocrypt::prelude::*;
use hydrocrypt_tests::counting_bytes;
use hydrocrypt_tests::rng::FixedRng;

#[test]
fn prelude_covers_primitives_and_secretbox() {
    let key: [u8; 32] = counting_bytes(32).try_into().unwrap();

    let mut mac = SipHash128::new(b"facade!!", &[1u8; 16]);
    mac.update(b"hello");
    let tag: Tag<16> = mac.finalize();
    assert!(SipHash128::verify(tag.as_ref(), b"hello", b"facade!!", &[1u8; 16]));

    let mut data = *b"stream me";
    let mut cipher = ChaCha12::new(&key, &Nonce::<24>::zeroed());
    StreamCipher::process(&mut cipher, &mut data).unwrap();
    assert_ne!(&data, b"stream me");

    let sbox = <SecretBox as SymmetricCipher>::new(&SecretBoxKey::new(key), b"facade!!").unwrap();
    let sealed = sbox.encrypt_with_rng(b"boxed", 5, &mut FixedRng(3)).unwrap();
    assert_eq!(sbox.decrypt(&sealed, 5).unwrap(), b"boxed");
    assert!(matches!(
        sbox.decrypt(&sealed[..10], 5),
        Err(Error::AuthenticationFailed { .. })
    ));
}

#[test]
fn reexported_crates_work_with_toolkit_types() {
    use hydrocrypt::subtle::ConstantTimeEq;
    use hydrocrypt::zeroize::Zeroize;

    let mut buf = SecretBuffer::new([7u8; 16]);
    buf.zeroize();
    assert_eq!(buf.as_ref(), &[0u8; 16]);

    let (a, b): (&[u8], &[u8]) = (b"same", b"same");
    assert!(bool::from(a.ct_eq(b)));

    let mut rng = hydrocrypt::rand::rngs::OsRng;
    assert!(SecretBox::generate_key(&mut rng).is_ok());
}
