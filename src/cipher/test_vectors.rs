use hex_literal::hex;

/// Known-answer test vector for a cipher.
///
/// The lengths of the plaintext and ciphertext are the lengths of the slices. The `aad` and `tag`
/// fields exist for AEAD ciphers and are empty for counter mode.
#[derive(Debug)]
pub struct CipherTestCase {
    /// Length of `key` (raw key plus salt).
    pub key_len: usize,
    /// Raw key followed by the salt.
    pub key: &'static [u8],
    /// Per-packet nonce passed to `set_iv`.
    pub nonce: [u8; 16],
    /// Input to the cipher.
    pub plaintext: &'static [u8],
    /// Expected output of the cipher.
    pub ciphertext: &'static [u8],
    /// Additional authenticated data (unused by counter mode).
    pub aad: &'static [u8],
    /// Expected authentication tag (unused by counter mode).
    pub tag: &'static [u8],
}

// from the legacy libsrtp code (keystream of RFC 3711, appendix B.2)
pub(super) static AES_128_ICM_TEST_CASE: CipherTestCase = CipherTestCase {
    key_len: 30,
    key: &hex!(
        "2b7e151628aed2a6abf7158809cf4f3c"
        "f0f1f2f3f4f5f6f7f8f9fafbfcfd"
    ),
    nonce: [0; 16],
    plaintext: &[0; 32],
    ciphertext: &hex!(
        "e03ead0935c95e80e166b16dd92b4eb4"
        "d23513162b02d0f72a43a2fe4a5f97ab"
    ),
    aad: &[],
    tag: &[],
};

// RFC 6188, section 7.1
#[cfg(feature = "aes192")]
pub(super) static AES_192_ICM_TEST_CASE: CipherTestCase = CipherTestCase {
    key_len: 38,
    key: &hex!(
        "eab234764e517b2d3d160d587d8c86219740f65f99b6bcf7"
        "f0f1f2f3f4f5f6f7f8f9fafbfcfd"
    ),
    nonce: [0; 16],
    plaintext: &[0; 32],
    ciphertext: &hex!(
        "35096cba4610028dc1b57503804ce37c"
        "5de986291dcce161d5165ec4568f5c9a"
    ),
    aad: &[],
    tag: &[],
};

// RFC 6188, section 7.2
pub(super) static AES_256_ICM_TEST_CASE: CipherTestCase = CipherTestCase {
    key_len: 46,
    key: &hex!(
        "57f82fe3613fd170a85ec93c40b1f092"
        "2ec4cb0dc025b58272147cc438944a98"
        "f0f1f2f3f4f5f6f7f8f9fafbfcfd"
    ),
    nonce: [0; 16],
    plaintext: &[0; 32],
    ciphertext: &hex!(
        "92bdd28a93c3f52511c677d08b5515a4"
        "9da71b2378a854f67050756ded165bac"
    ),
    aad: &[],
    tag: &[],
};
