//! AES-CBC encryption and decryption
//!
//! The key length selects the variant:
//! - 16 bytes: AES-128
//! - 24 bytes: AES-192
//! - 32 bytes: AES-256
//!
//! The IV is supplied by the caller and must be 16 bytes. Output is raw
//! bytes; callers choose their own transport encoding.

use aes::{Aes128, Aes192, Aes256};

use super::mode::{Direction, cbc_transform};
use super::padding::Padding;
use crate::error::{CryptError, Result};

fn aes_transform(
    direction: Direction,
    data: &[u8],
    key: &[u8],
    iv: &[u8],
    padding: Padding,
) -> Result<Vec<u8>> {
    match key.len() {
        16 => cbc_transform::<Aes128>(direction, data, key, iv, padding),
        24 => cbc_transform::<Aes192>(direction, data, key, iv, padding),
        32 => cbc_transform::<Aes256>(direction, data, key, iv, padding),
        len => Err(CryptError::InvalidKey(format!(
            "AES requires a 16, 24 or 32-byte key, got {} bytes",
            len
        ))),
    }
}

/// Encrypt bytes using AES-CBC
///
/// # Arguments
///
/// * `plaintext` - The bytes to encrypt
/// * `key` - 16, 24 or 32 byte key
/// * `iv` - 16 byte initialization vector
/// * `padding` - Padding strategy
pub fn aes_encrypt(plaintext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    aes_transform(Direction::Encrypt, plaintext, key, iv, padding)
}

/// Decrypt bytes produced by [`aes_encrypt`]
pub fn aes_decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    aes_transform(Direction::Decrypt, ciphertext, key, iv, padding)
}
