use cipher::{InnerIvInit as _, KeyInit, BlockCipher, BlockEncrypt, StreamCipher as _};
use cipher::consts::U16;
use crate::{Error, Result};
use super::key::KeySize;
use super::v128::V128;

/// AES in counter mode, engaged with a key and an initial counter block.
///
/// The counter block is incremented as a big-endian 128-bit integer after every 16 bytes of
/// keystream.
pub(crate) trait CtrEngine {
    fn process(&mut self, data: &mut [u8]) -> Result<()>;
}

/// Engages the AES-CTR engine for `key_size` with the given key and initial counter.
pub(crate) fn engage(
    key_size: KeySize,
    key: &[u8],
    counter: &V128,
) -> Result<Box<dyn CtrEngine + Send>> {
    let iv = counter.as_bytes();
    Ok(match key_size {
        KeySize::Aes128 => Box::new(new_ctr::<aes::Aes128>(key, iv)?),
        #[cfg(feature = "aes192")]
        KeySize::Aes192 => Box::new(new_ctr::<aes::Aes192>(key, iv)?),
        #[cfg(not(feature = "aes192"))]
        KeySize::Aes192 => return Err(Error::BadParameter("aes-192 is not supported")),
        KeySize::Aes256 => Box::new(new_ctr::<aes::Aes256>(key, iv)?),
    })
}

struct AesCtr<C>
    where C: BlockCipher<BlockSize = U16> + BlockEncrypt,
{
    cipher: cipher::StreamCipherCoreWrapper<ctr::CtrCore<C, ctr::flavors::Ctr128BE>>,
}

fn new_ctr<C>(key: &[u8], iv: &[u8]) -> Result<AesCtr<C>>
    where C: KeyInit + BlockCipher<BlockSize = U16> + BlockEncrypt,
{
    let cipher = C::new_from_slice(key)
        .map_err(|_| Error::OperationFailed("invalid key length for aes-ctr"))?;
    let ctr = ctr::CtrCore::inner_iv_slice_init(cipher, iv)
        .map_err(|_| Error::OperationFailed("invalid counter length for aes-ctr"))?;
    Ok(AesCtr { cipher: cipher::StreamCipherCoreWrapper::from_core(ctr) })
}

impl<C> CtrEngine for AesCtr<C>
    where C: BlockCipher<BlockSize = U16> + BlockEncrypt,
{
    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.cipher.try_apply_keystream(data)
            .map_err(|_| Error::CipherOperationFailed("keystream exhausted"))
    }
}
