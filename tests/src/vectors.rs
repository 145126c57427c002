//! Known-answer vectors shared by the integration tests

/// A ChaCha12 keystream vector; the keystream is the encryption of zeros
#[derive(Debug, Clone, Copy)]
pub struct KeystreamVector {
    /// 32-byte key, hex
    pub key: &'static str,
    /// 12- or 24-byte nonce, hex
    pub nonce: &'static str,
    /// Expected keystream prefix, hex
    pub keystream: &'static str,
}

/// ChaCha12 and XChaCha12 keystreams
pub const KEYSTREAMS: &[KeystreamVector] = &[
    KeystreamVector {
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        nonce: "000000000000000000000000",
        keystream: "9bf49a6a0755f953811fce125f2683d50429c3bb49e074147e0089a52eae155f0564f879d27ae3c02ce82834acfa8c793a629f2ca0de6919610be82f411326be",
    },
    KeystreamVector {
        key: "8000000000000000000000000000000000000000000000000000000000000000",
        nonce: "000000000000000000000000",
        keystream: "789cc357f0b6cda5395f08c8538f1226d08eb3e16ebd6b6db6cc9ca77d81d900bb9d21f6ef0b720550d161f1a80fab0468e48c086daad356edce3a3f988d8e",
    },
    KeystreamVector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        nonce: "000000000001020304050607",
        keystream: "6898eb04f3d151985e28e882f35daf28d2a1689f79081ffb08cdc48edbbd3dcd683c764f3dd7302293928ca3d4ef4194e6e22f41a72204a14b89115d06ca29fb",
    },
    KeystreamVector {
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        nonce: "000000000000000000000000000000000000000000000000",
        keystream: "10e0a531a2f916a364eadbbf8e726d4cb01d18eb4acada60792202072a7b4b7a135846a9d4452c5ce8dc06d77907f1a18eebb978fb8ee00b9f3973fb7af1b113",
    },
    KeystreamVector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        nonce: "000102030405060708090a0b0c0d0e0f1011121314151617",
        keystream: "60bdbcfb13471492e573e1ec837f739a6f5e41cf916bdcd8e8a682166b51d4b2dd8be22c8541bb8eb3300e92b39cf03246afd096196a7ce5c22dd43c97eac91a",
    },
];

/// A SecretBox sealing produced with [`FixedRng`](crate::rng::FixedRng)
#[derive(Debug, Clone, Copy)]
pub struct SecretBoxVector {
    /// Root key, hex
    pub key: &'static str,
    /// 8-byte context
    pub context: &'static [u8; 8],
    /// Message id
    pub id: u64,
    /// Byte repeated by the random source
    pub random: u8,
    /// Plaintext, hex
    pub message: &'static str,
    /// Expected ciphertext, hex
    pub ciphertext: &'static str,
}

/// SecretBox sealings
pub const SECRETBOXES: &[SecretBoxVector] = &[
    SecretBoxVector {
        key: "b634b3278d800dc126f589ef84d82ab04e0a11bc79c5181e195ddf8f376aad8d",
        context: b"libtests",
        id: 7,
        random: 0x42,
        message: "e1047ba9476bf8ff312c01b4345a7d8ca5792b0ad467313f1d",
        ciphertext: "6124b152adba372567985196aeffcc228878d6cfc2641a386cb094e1546f112fbdbc9074c50ea6a88319da4e043685680793316771c6f582446d2b1fc6",
    },
    SecretBoxVector {
        key: "b634b3278d800dc126f589ef84d82ab04e0a11bc79c5181e195ddf8f376aad8d",
        context: b"libtests",
        id: 0,
        random: 0x42,
        message: "",
        ciphertext: "71fbcd1a208f85c67af0d1c360c0a8e7ed12ce97991bbb49b0273309d44d570e4240e034",
    },
    SecretBoxVector {
        key: "b634b3278d800dc126f589ef84d82ab04e0a11bc79c5181e195ddf8f376aad8d",
        context: b"libtests",
        id: 7,
        random: 0x43,
        message: "e1047ba9476bf8ff312c01b4345a7d8ca5792b0ad467313f1d",
        ciphertext: "a75081d40fd8c9fb43293f01349d6912895fcce60f5a3c493b408f60e13d5eca31e7bb0edd9186bbb12f084326109a1584ddef54c3ca2a316edd2fe3c7",
    },
];
