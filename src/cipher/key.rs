use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};
use crate::{Error, Result};

/// Length of the SRTP session salt in bytes (112 bits).
pub const SALT_LEN: usize = 14;

/// Length of the largest supported raw key in bytes.
pub const MAX_KEY_LEN: usize = 32;

const HALF_LEN: usize = 16;

/// Size of the raw AES key used by an ICM cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 16-byte key for AES-128.
    Aes128,
    /// 24-byte key for AES-192.
    Aes192,
    /// 32-byte key for AES-256.
    Aes256,
}

impl KeySize {
    /// Length of the raw key in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => 16,
            KeySize::Aes192 => 24,
            KeySize::Aes256 => 32,
        }
    }

    /// Strength of the key in bits.
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Length of the raw key followed by the salt.
    pub const fn inflated_len(self) -> usize {
        self.key_len() + SALT_LEN
    }

    /// Selects the key size from the inflated key length (raw key plus salt).
    ///
    /// Only 30, 38 and 46 are accepted; 38 (AES-192) only with the `aes192` feature.
    pub fn from_inflated_len(key_len: usize) -> Result<KeySize> {
        match key_len {
            30 => Ok(KeySize::Aes128),
            #[cfg(feature = "aes192")]
            38 => Ok(KeySize::Aes192),
            46 => Ok(KeySize::Aes256),
            _ => Err(Error::BadParameter("key length must be 30, 38 or 46 bytes including salt")),
        }
    }
}

/// Raw key bytes of a cipher context.
///
/// The storage always has room for the largest key; the `key_size` tells how much of it is
/// meaningful. The bytes are wiped when the value is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct KeyMaterial {
    pub(super) bytes: [u8; MAX_KEY_LEN],
    #[zeroize(skip)]
    key_size: KeySize,
}

impl KeyMaterial {
    pub fn new(key_size: KeySize) -> KeyMaterial {
        KeyMaterial { bytes: [0; MAX_KEY_LEN], key_size }
    }

    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Copies the raw key, which must be exactly `key_size` bytes long.
    ///
    /// The first 16 bytes go to the low half of the storage and the rest (for AES-192 and AES-256)
    /// to the high half, so that the layout is the same for every key size.
    pub fn load(&mut self, key: &[u8]) {
        debug_assert_eq!(key.len(), self.key_size.key_len());
        self.bytes.zeroize();
        let (low, high) = key.split_at(HALF_LEN.min(key.len()));
        self.bytes[..low.len()].copy_from_slice(low);
        self.bytes[HALF_LEN..HALF_LEN + high.len()].copy_from_slice(high);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.key_size.key_len()]
    }
}

impl fmt::Debug for KeyMaterial {
    #[cfg(feature = "debug_less_secure")]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key_size", &self.key_size)
            .field("bytes", &HexBytes(self.as_bytes()))
            .finish()
    }

    #[cfg(not(feature = "debug_less_secure"))]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "debug_less_secure")]
pub(crate) struct HexBytes<'a>(pub &'a [u8]);

#[cfg(feature = "debug_less_secure")]
impl fmt::Debug for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
