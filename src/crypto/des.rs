//! Single DES, unchained, hex encoded
//!
//! Each 8-byte block is encrypted on its own with no IV. Identical
//! plaintext blocks give identical ciphertext blocks; this matches the data
//! already stored by legacy callers and must not change without a new
//! ciphertext format.

use des::Des;

use super::encoding::Encoding;
use super::key::check_key_length;
use super::mode::{Direction, block_transform};
use super::padding::Padding;
use crate::DES_KEY_LENGTH;
use crate::error::Result;

/// Encrypt text with DES and return lowercase hex
///
/// `key` must be exactly 8 bytes.
///
/// # Example
///
/// ```
/// use cipherkit::crypto::{des_encrypt, des_decrypt, Padding};
///
/// let hex = des_encrypt("abc", b"8bytekey", Padding::Zero).unwrap();
/// assert_eq!(hex.len(), 16);
/// assert_eq!(des_decrypt(&hex, b"8bytekey", Padding::Zero).unwrap(), "abc");
/// ```
pub fn des_encrypt(plaintext: &str, key: &[u8], padding: Padding) -> Result<String> {
    check_key_length(key, DES_KEY_LENGTH, "DES")?;
    let encrypted = block_transform::<Des>(Direction::Encrypt, plaintext.as_bytes(), key, padding)?;
    Ok(Encoding::Hex.encode(&encrypted))
}

/// Decrypt hex produced by [`des_encrypt`]
pub fn des_decrypt(ciphertext: &str, key: &[u8], padding: Padding) -> Result<String> {
    let encrypted = Encoding::Hex.decode(ciphertext)?;
    check_key_length(key, DES_KEY_LENGTH, "DES")?;
    let decrypted = block_transform::<Des>(Direction::Decrypt, &encrypted, key, padding)?;
    Ok(String::from_utf8(decrypted)?)
}
