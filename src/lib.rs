//! AES Integer Counter Mode (AES-ICM) keystream for SRTP in pure Rust.
//!
//! This crate implements the AES-128, AES-192 and AES-256 counter mode ciphers of SRTP
//! (RFC 3711 and RFC 6188): it turns a session key, a session salt and a per-packet nonce into
//! the initial counter block and applies the resulting keystream to packet payloads. Key
//! derivation, authentication and packet framing are left to the SRTP layer above.
//!
//! - Algorithms are described by the static [`CipherAlgo`] descriptors in the [`cipher`]
//!   module.
//! - The cipher context itself is [`AesIcm`], also usable through the [`Cipher`] trait.
//! - Known-answer and random self-tests are in [`cipher::self_test`].
//!
//! ```
//! use srtp_icm::cipher::{self, Cipher as _};
//!
//! let key_and_salt = [0x42u8; 30];
//! let mut icm = cipher::AES_128_ICM.alloc(30)?;
//! icm.init(&key_and_salt)?;
//!
//! let mut payload = *b"hello, srtp";
//! icm.set_iv(cipher::V128::from_packet_index(1).as_bytes())?;
//! icm.encrypt(&mut payload)?;
//!
//! icm.set_iv(cipher::V128::from_packet_index(1).as_bytes())?;
//! icm.decrypt(&mut payload)?;
//! assert_eq!(&payload, b"hello, srtp");
//! # Ok::<(), srtp_icm::Error>(())
//! ```
//!
//! # Features
//!
//! - `aes192` (enabled by default): support for AES-192.
//! - `debug_less_secure`: include key material in debug output and logs. Never enable this in
//!   production.
#![warn(missing_docs)]

pub use crate::error::{Result, Error};

pub use self::cipher::{AesIcm, Cipher, CipherAlgo, CipherTypeId, KeySize, V128};

pub mod cipher;
mod error;
