//! Block cipher modes: unchained (block by block) and CBC
//!
//! Both transforms are generic over a RustCrypto block cipher and apply the
//! selected [`Padding`] around the raw transform: pad before encrypting,
//! unpad after decrypting.

use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::generic_array::GenericArray;
use cbc::cipher::{
    BlockCipher, BlockDecrypt, BlockDecryptMut, BlockEncrypt, BlockEncryptMut, InnerIvInit,
    KeyInit,
};

use super::padding::Padding;
use crate::error::{CryptError, Result};

/// Direction of a block transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

fn check_alignment(len: usize, block_size: usize) -> Result<()> {
    if len % block_size != 0 {
        return Err(CryptError::BlockAlignment { len, block_size });
    }
    Ok(())
}

fn new_cipher<C: KeyInit>(key: &[u8]) -> Result<C> {
    C::new_from_slice(key).map_err(|_| {
        CryptError::InvalidKey(format!(
            "expected a {}-byte key, got {} bytes",
            C::key_size(),
            key.len()
        ))
    })
}

/// Transform `data` one block at a time with no IV and no chaining.
///
/// **WARNING**: identical plaintext blocks produce identical ciphertext
/// blocks. Kept for compatibility with data produced by legacy DES callers.
pub fn block_transform<C>(
    direction: Direction,
    data: &[u8],
    key: &[u8],
    padding: Padding,
) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockEncrypt + BlockDecrypt + KeyInit,
{
    let cipher = new_cipher::<C>(key)?;
    let block_size = C::block_size();

    let mut buffer = match direction {
        Direction::Encrypt => padding.pad(data, block_size),
        Direction::Decrypt => data.to_vec(),
    };
    check_alignment(buffer.len(), block_size)?;

    for chunk in buffer.chunks_exact_mut(block_size) {
        let block = GenericArray::from_mut_slice(chunk);
        match direction {
            Direction::Encrypt => cipher.encrypt_block(block),
            Direction::Decrypt => cipher.decrypt_block(block),
        }
    }

    match direction {
        Direction::Encrypt => Ok(buffer),
        Direction::Decrypt => padding.unpad(&buffer),
    }
}

/// Transform `data` in CBC mode with the given IV.
///
/// The IV must be exactly one block long.
pub fn cbc_transform<C>(
    direction: Direction,
    data: &[u8],
    key: &[u8],
    iv: &[u8],
    padding: Padding,
) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut + KeyInit,
{
    let block_size = C::block_size();
    let invalid_iv = || CryptError::InvalidIv {
        expected: block_size,
        actual: iv.len(),
    };
    if iv.len() != block_size {
        return Err(invalid_iv());
    }

    let cipher = new_cipher::<C>(key)?;

    match direction {
        Direction::Encrypt => {
            let mut buffer = padding.pad(data, block_size);
            let len = buffer.len();

            let encryptor = cbc::Encryptor::<C>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| invalid_iv())?;
            let encrypted = encryptor
                .encrypt_padded_mut::<NoPadding>(&mut buffer, len)
                .map_err(|_| CryptError::BlockAlignment { len, block_size })?;

            Ok(encrypted.to_vec())
        }
        Direction::Decrypt => {
            check_alignment(data.len(), block_size)?;
            let mut buffer = data.to_vec();

            let decryptor = cbc::Decryptor::<C>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| invalid_iv())?;
            let decrypted = decryptor
                .decrypt_padded_mut::<NoPadding>(&mut buffer)
                .map_err(|_| CryptError::BlockAlignment {
                    len: data.len(),
                    block_size,
                })?;

            padding.unpad(decrypted)
        }
    }
}
