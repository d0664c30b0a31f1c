//! Triple-DES (EDE3) in CBC mode, base64 encoded
//!
//! The secret is stretched to 24 bytes by [`normalize_triple_des_key`] and
//! the IV is the first 8 bytes of that key.
//!
//! **IMPORTANT**: a key-derived IV makes encryption deterministic. The same
//! plaintext under the same secret always produces the same ciphertext.
//! This is required to read ciphertext already stored by existing callers.

use des::TdesEde3;

use super::encoding::Encoding;
use super::key::normalize_triple_des_key;
use super::mode::{Direction, cbc_transform};
use super::padding::Padding;
use crate::DES_BLOCK_SIZE;
use crate::error::Result;

/// Encrypt text with Triple-DES CBC and return standard base64
///
/// # Example
///
/// ```
/// use cipherkit::crypto::{triple_des_encrypt, triple_des_decrypt, Padding};
///
/// let encrypted = triple_des_encrypt("Hello, World!", b"testkey", Padding::Pkcs5).unwrap();
/// let decrypted = triple_des_decrypt(&encrypted, b"testkey", Padding::Pkcs5).unwrap();
/// assert_eq!(decrypted, "Hello, World!");
/// ```
pub fn triple_des_encrypt(plaintext: &str, secret: &[u8], padding: Padding) -> Result<String> {
    let key = normalize_triple_des_key(secret)?;
    let iv = &key[..DES_BLOCK_SIZE];

    let encrypted = cbc_transform::<TdesEde3>(Direction::Encrypt, plaintext.as_bytes(), &key, iv, padding)?;
    Ok(Encoding::Base64.encode(&encrypted))
}

/// Decrypt base64 produced by [`triple_des_encrypt`]
pub fn triple_des_decrypt(ciphertext: &str, secret: &[u8], padding: Padding) -> Result<String> {
    let encrypted = Encoding::Base64.decode(ciphertext)?;
    let key = normalize_triple_des_key(secret)?;
    let iv = &key[..DES_BLOCK_SIZE];

    let decrypted = cbc_transform::<TdesEde3>(Direction::Decrypt, &encrypted, &key, iv, padding)?;
    Ok(String::from_utf8(decrypted)?)
}
