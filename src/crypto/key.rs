//! Key normalization for Triple-DES
//!
//! Triple-DES needs exactly 24 bytes of key material. Shorter or longer
//! secrets are stretched or truncated:
//! 1. Start from the secret bytes
//! 2. Append the secret again, byte by byte, until >= 24 bytes
//! 3. Truncate to 24 bytes
//!
//! **IMPORTANT**: this is a convenience stretch, not a key derivation
//! function. A short secret yields a weak key. Callers that need real key
//! strength must supply 24 random bytes.
//!
//! DES and AES keys are never normalized; they must already have the exact
//! length the cipher requires.

use crate::error::{CryptError, Result};

/// Key length for Triple-DES (EDE3, 3 x 8 bytes)
pub const TRIPLE_DES_KEY_LENGTH: usize = 24;

/// Derive a 24-byte Triple-DES key from a secret of any non-zero length
///
/// # Example
///
/// ```
/// use cipherkit::crypto::normalize_triple_des_key;
///
/// let key = normalize_triple_des_key(b"testkey").unwrap();
/// assert_eq!(&key[..], b"testkeytestkeytestkeytes");
/// ```
pub fn normalize_triple_des_key(secret: &[u8]) -> Result<[u8; TRIPLE_DES_KEY_LENGTH]> {
    if secret.is_empty() {
        return Err(CryptError::InvalidKey("empty secret".to_string()));
    }

    let mut key = [0u8; TRIPLE_DES_KEY_LENGTH];
    for (dst, src) in key.iter_mut().zip(secret.iter().cycle()) {
        *dst = *src;
    }

    Ok(key)
}

/// Check that a pass-through key has the exact length a cipher requires
pub(crate) fn check_key_length(key: &[u8], expected: usize, cipher: &str) -> Result<()> {
    if key.len() != expected {
        return Err(CryptError::InvalidKey(format!(
            "{} requires a {}-byte key, got {} bytes",
            cipher,
            expected,
            key.len()
        )));
    }
    Ok(())
}
