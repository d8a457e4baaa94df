use std::fmt;
use zeroize::Zeroize as _;
use crate::{Error, Result};
use super::{Cipher, CipherAlgo, CipherTypeId};
use super::engine::{self, CtrEngine};
use super::key::{KeyMaterial, KeySize};
use super::test_vectors::{AES_128_ICM_TEST_CASE, AES_256_ICM_TEST_CASE};
#[cfg(feature = "aes192")]
use super::test_vectors::AES_192_ICM_TEST_CASE;
use super::v128::V128;

/// "aes-128-icm" cipher (AES_CM_128) from RFC 3711.
pub static AES_128_ICM: CipherAlgo = CipherAlgo {
    name: "aes-128-icm",
    description: "AES-128 integer counter mode",
    id: CipherTypeId::AesIcm128,
    key_len: 30,
    test_case: &AES_128_ICM_TEST_CASE,
    make_cipher: |key_len| Ok(Box::new(AesIcm::new(key_len)?)),
};

/// "aes-192-icm" cipher (AES_192_CM) from RFC 6188.
#[cfg(feature = "aes192")]
pub static AES_192_ICM: CipherAlgo = CipherAlgo {
    name: "aes-192-icm",
    description: "AES-192 integer counter mode",
    id: CipherTypeId::AesIcm192,
    key_len: 38,
    test_case: &AES_192_ICM_TEST_CASE,
    make_cipher: |key_len| Ok(Box::new(AesIcm::new(key_len)?)),
};

/// "aes-256-icm" cipher (AES_256_CM) from RFC 6188.
pub static AES_256_ICM: CipherAlgo = CipherAlgo {
    name: "aes-256-icm",
    description: "AES-256 integer counter mode",
    id: CipherTypeId::AesIcm256,
    key_len: 46,
    test_case: &AES_256_ICM_TEST_CASE,
    make_cipher: |key_len| Ok(Box::new(AesIcm::new(key_len)?)),
};

/// AES Integer Counter Mode cipher context.
///
/// The context owns the raw key, the offset derived from the salt and the counter of the current
/// packet. All of them are wiped when the context is dropped.
pub struct AesIcm {
    algo: &'static CipherAlgo,
    key: KeyMaterial,
    offset: V128,
    counter: V128,
    engine: Option<Box<dyn CtrEngine + Send>>,
}

impl AesIcm {
    /// Allocates a context for the inflated key length `key_len` (30, 38 or 46).
    ///
    /// The context has no key yet, call [`init()`][Self::init] before use.
    pub fn new(key_len: usize) -> Result<AesIcm> {
        log::debug!("allocating cipher with key length {}", key_len);
        let key_size = KeySize::from_inflated_len(key_len)?;
        let algo = algo_for_key_size(key_size)?;
        Ok(AesIcm {
            algo,
            key: KeyMaterial::new(key_size),
            offset: V128::ZERO,
            counter: V128::ZERO,
            engine: None,
        })
    }

    /// The algorithm selected at allocation.
    pub fn algo(&self) -> &'static CipherAlgo {
        self.algo
    }

    /// Size of the raw AES key.
    pub fn key_size(&self) -> KeySize {
        self.key.key_size()
    }

    /// The offset derived from the salt.
    pub fn offset(&self) -> &V128 {
        &self.offset
    }

    /// The initial counter of the current packet.
    pub fn counter(&self) -> &V128 {
        &self.counter
    }

    /// Returns true if [`set_iv()`][Self::set_iv] engaged the block cipher for a packet.
    pub fn is_engaged(&self) -> bool {
        self.engine.is_some()
    }

    /// Sets the key from the raw key immediately followed by the 14-byte salt.
    ///
    /// The salt becomes the offset (and the counter), with the two lowest-order bytes forced to
    /// zero. The block cipher is not engaged until [`set_iv()`][Self::set_iv], and any packet in
    /// progress under the previous key is abandoned.
    pub fn init(&mut self, key: &[u8]) -> Result<()> {
        let key_size = self.key.key_size();
        if key.len() != key_size.inflated_len() {
            return Err(Error::BadParameter("key length does not match the cipher"))
        }

        self.engine = None;
        let (raw_key, salt) = key.split_at(key_size.key_len());
        self.offset.load_salt(salt);
        self.counter.load_salt(salt);
        self.key.load(raw_key);

        #[cfg(feature = "debug_less_secure")]
        log::trace!("key {:?}", super::key::HexBytes(self.key.as_bytes()));
        log::debug!("initialized {} cipher, offset {}", self.algo.name, self.offset);
        Ok(())
    }

    /// Sets the counter to `offset XOR iv` and engages the block cipher from that counter.
    ///
    /// Must be called before every packet. The nonce must never repeat for the same key.
    pub fn set_iv(&mut self, iv: &[u8; 16]) -> Result<()> {
        let nonce = V128::from_bytes(*iv);
        log::trace!("setting iv {}", nonce);

        self.engine = None;
        self.counter = self.offset ^ nonce;
        log::trace!("set counter {}", self.counter);

        let engine = engine::engage(self.key.key_size(), self.key.as_bytes(), &self.counter)?;
        self.engine = Some(engine);
        Ok(())
    }

    /// Applies the keystream to `data` in place and returns the number of processed bytes.
    ///
    /// Encryption and decryption are the same operation. Consecutive calls after one
    /// [`set_iv()`][Self::set_iv] continue the keystream of the same packet. If the block cipher
    /// fails, the packet is abandoned and `set_iv()` must be called again.
    pub fn apply(&mut self, data: &mut [u8]) -> Result<usize> {
        let engine = match self.engine.as_mut() {
            Some(engine) => engine,
            None => return Err(Error::CipherOperationFailed("no iv was set for this packet")),
        };

        log::trace!("applying keystream from counter {} to {} bytes", self.counter, data.len());
        if let Err(err) = engine.process(data) {
            self.engine = None;
            return Err(err)
        }
        Ok(data.len())
    }

    /// Releases the block cipher and wipes the key material, offset and counter.
    ///
    /// Dropping the context has the same effect.
    pub fn destroy(self) {
        log::debug!("destroying {} cipher", self.algo.name);
        drop(self)
    }
}

fn algo_for_key_size(key_size: KeySize) -> Result<&'static CipherAlgo> {
    match key_size {
        KeySize::Aes128 => Ok(&AES_128_ICM),
        #[cfg(feature = "aes192")]
        KeySize::Aes192 => Ok(&AES_192_ICM),
        #[cfg(not(feature = "aes192"))]
        KeySize::Aes192 => Err(Error::BadParameter("aes-192 is not supported")),
        KeySize::Aes256 => Ok(&AES_256_ICM),
    }
}

impl Drop for AesIcm {
    fn drop(&mut self) {
        self.engine = None;
        self.key.zeroize();
        self.offset.zeroize();
        self.counter.zeroize();
    }
}

impl Cipher for AesIcm {
    fn algo(&self) -> &'static CipherAlgo {
        self.algo
    }

    fn key_len(&self) -> usize {
        self.key.key_size().inflated_len()
    }

    fn init(&mut self, key: &[u8]) -> Result<()> {
        AesIcm::init(self, key)
    }

    fn set_iv(&mut self, iv: &[u8; 16]) -> Result<()> {
        AesIcm::set_iv(self, iv)
    }

    fn encrypt(&mut self, data: &mut [u8]) -> Result<usize> {
        self.apply(data)
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<usize> {
        self.apply(data)
    }

    fn destroy(self: Box<Self>) {
        AesIcm::destroy(*self)
    }
}

impl fmt::Debug for AesIcm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AesIcm")
            .field("algo", &self.algo.name)
            .field("key", &self.key)
            .field("offset", &self.offset)
            .field("counter", &self.counter)
            .field("engaged", &self.engine.is_some())
            .finish()
    }
}
