//! AES Integer Counter Mode ciphers.
//!
//! SRTP (RFC 3711) encrypts every packet with AES in Integer Counter Mode (ICM), which is
//! counter mode with a fixed layout of the initial counter block. The 112-bit session salt
//! becomes the *offset*, whose two lowest-order bytes are always zero; for every packet the caller
//! supplies a 128-bit nonce (usually the 48-bit packet index shifted left by 16 bits, XOR-ed with
//! the SSRC), and the initial *counter* is `offset XOR nonce`. The lowest 16 bits of the counter
//! count the keystream blocks within one packet.
//!
//! A cipher is allocated from an [`CipherAlgo`] with the *inflated* key length (raw key plus
//! 14-byte salt), then used as follows:
//!
//! 1. [`Cipher::init()`] with the raw key followed by the salt,
//! 2. for every packet, [`Cipher::set_iv()`] with the packet nonce and then
//!    [`Cipher::encrypt()`] or [`Cipher::decrypt()`] (which are the same operation),
//! 3. [`Cipher::destroy()`] (or simply drop the cipher), which wipes the key material.
//!
//! The caller must never call `set_iv()` with the same nonce twice for one key: that would reuse
//! the keystream.
//!
//! # Supported algorithms
//!
//! - "aes-128-icm" ([`AES_128_ICM`])
//! - "aes-192-icm" ([`AES_192_ICM`], only with the `aes192` feature)
//! - "aes-256-icm" ([`AES_256_ICM`])
//!
//! ICM does not authenticate, so the ciphers have no operations for additional authenticated
//! data or tags.
use derivative::Derivative;
use crate::Result;
pub use self::aes_icm::{AesIcm, AES_128_ICM, AES_256_ICM};
#[cfg(feature = "aes192")]
pub use self::aes_icm::AES_192_ICM;
pub use self::key::{KeySize, MAX_KEY_LEN, SALT_LEN};
pub use self::test_vectors::CipherTestCase;
pub use self::v128::V128;

mod aes_icm;
mod engine;
mod key;
mod test_vectors;
mod v128;

/// Identifier of a cipher type, as used by the SRTP crypto kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CipherTypeId {
    /// AES-128 in integer counter mode.
    AesIcm128 = 1,
    /// AES-192 in integer counter mode.
    AesIcm192 = 4,
    /// AES-256 in integer counter mode.
    AesIcm256 = 5,
}

/// Algorithm for encrypting and decrypting SRTP packets.
///
/// See the [module documentation][self] for details.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct CipherAlgo {
    /// Name of the algorithm.
    pub name: &'static str,
    /// Human readable description of the algorithm.
    pub description: &'static str,
    /// Identifier of the algorithm.
    pub id: CipherTypeId,
    /// Inflated key length (raw key plus salt) that this algorithm expects.
    pub key_len: usize,
    /// Known-answer test vector used by [`self_test()`][Self::self_test].
    pub test_case: &'static CipherTestCase,
    #[derivative(Debug = "ignore")]
    pub(crate) make_cipher: fn(key_len: usize) -> Result<Box<dyn Cipher + Send>>,
}

impl CipherAlgo {
    /// Allocates a new cipher for the given inflated key length.
    ///
    /// The variant of AES is selected by `key_len` (30, 38 or 46 bytes), other lengths fail with
    /// [`Error::BadParameter`][crate::Error::BadParameter].
    pub fn alloc(&self, key_len: usize) -> Result<Box<dyn Cipher + Send>> {
        (self.make_cipher)(key_len)
    }

    /// Runs the known-answer test of this algorithm.
    pub fn self_test(&self) -> Result<()> {
        self_test::run(self)
    }
}

/// An allocated cipher context.
///
/// See the [module documentation][self] for the order in which the methods must be called.
pub trait Cipher {
    /// The algorithm of this cipher.
    fn algo(&self) -> &'static CipherAlgo;

    /// The inflated key length (raw key plus salt) that this cipher was allocated with.
    fn key_len(&self) -> usize;

    /// Sets the key and salt, given as the raw key immediately followed by the 14-byte salt.
    fn init(&mut self, key: &[u8]) -> Result<()>;

    /// Starts a new packet: sets the counter to the offset XOR-ed with `iv`.
    fn set_iv(&mut self, iv: &[u8; 16]) -> Result<()>;

    /// Encrypts `data` in place and returns the number of processed bytes.
    fn encrypt(&mut self, data: &mut [u8]) -> Result<usize>;

    /// Decrypts `data` in place and returns the number of processed bytes.
    fn decrypt(&mut self, data: &mut [u8]) -> Result<usize>;

    /// Writes raw keystream into `buffer`.
    fn output(&mut self, buffer: &mut [u8]) -> Result<()> {
        buffer.fill(0);
        self.encrypt(buffer)?;
        Ok(())
    }

    /// Releases the cipher and wipes its key material.
    fn destroy(self: Box<Self>) {
        drop(self)
    }
}

#[cfg(feature = "aes192")]
/// All supported algorithms, ordered by their identifier.
pub static ALL_ALGOS: &[&CipherAlgo] = &[&AES_128_ICM, &AES_192_ICM, &AES_256_ICM];

#[cfg(not(feature = "aes192"))]
/// All supported algorithms, ordered by their identifier.
pub static ALL_ALGOS: &[&CipherAlgo] = &[&AES_128_ICM, &AES_256_ICM];

/// Finds the algorithm with the given identifier.
pub fn by_id(id: CipherTypeId) -> Option<&'static CipherAlgo> {
    ALL_ALGOS.iter().copied().find(|algo| algo.id == id)
}
