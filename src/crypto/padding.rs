//! Block padding strategies
//!
//! Every encrypt/decrypt call takes a [`Padding`] selector; callers must use
//! the same strategy on both sides.

use crate::error::{CryptError, Result};

/// Largest block size whose padding length fits in one byte
pub const MAX_BLOCK_SIZE: usize = 255;

/// Padding strategy applied around a block transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    /// Pad with zero bytes; unpadding strips every trailing zero byte.
    ///
    /// Lossy when the plaintext itself ends with zero bytes.
    Zero,
    /// PKCS#5 padding (same scheme as [`Padding::Pkcs7`])
    Pkcs5,
    /// PKCS#7 padding
    Pkcs7,
}

impl Padding {
    /// Extend `data` to a multiple of `block_size`.
    ///
    /// Aligned input still receives a full block of padding.
    ///
    /// # Panics
    ///
    /// If `block_size` is 0 or larger than 255 (PKCS stores the padding
    /// length in one byte).
    pub fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        assert!(
            (1..=MAX_BLOCK_SIZE).contains(&block_size),
            "block size must be between 1 and {}, got {}",
            MAX_BLOCK_SIZE,
            block_size
        );

        let padding = block_size - data.len() % block_size;
        let fill = match self {
            Padding::Zero => 0u8,
            Padding::Pkcs5 | Padding::Pkcs7 => padding as u8,
        };

        let mut padded = Vec::with_capacity(data.len() + padding);
        padded.extend_from_slice(data);
        padded.resize(data.len() + padding, fill);
        padded
    }

    /// Remove padding added by [`Padding::pad`]
    pub fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Padding::Zero => {
                let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
                Ok(data[..end].to_vec())
            }
            Padding::Pkcs5 | Padding::Pkcs7 => {
                let Some(&last) = data.last() else {
                    return Err(CryptError::Unpadding("empty buffer".to_string()));
                };

                let padding = last as usize;
                if padding > data.len() {
                    return Err(CryptError::Unpadding(format!(
                        "padding length {} exceeds buffer length {}",
                        padding,
                        data.len()
                    )));
                }

                Ok(data[..data.len() - padding].to_vec())
            }
        }
    }
}
