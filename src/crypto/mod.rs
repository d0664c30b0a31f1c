//! Symmetric cipher operations
//!
//! This module implements DES (unchained, hex), Triple-DES (CBC with a
//! key-derived IV, base64) and AES (CBC with a caller IV, raw bytes), each
//! with a caller-selected [`Padding`], plus HMAC signing and random hex.

mod aes;
mod des;
mod encoding;
mod hmac;
mod key;
pub mod mode;
mod padding;
mod random;
mod triple_des;

pub use self::aes::{aes_decrypt, aes_encrypt};
pub use self::des::{des_decrypt, des_encrypt};
pub use self::encoding::Encoding;
pub use self::hmac::hmac_sign;
pub use self::key::{TRIPLE_DES_KEY_LENGTH, normalize_triple_des_key};
pub use self::mode::{Direction, block_transform, cbc_transform};
pub use self::padding::{MAX_BLOCK_SIZE, Padding};
pub use self::random::{random_hex, random_hex_with};
pub use self::triple_des::{triple_des_decrypt, triple_des_encrypt};

#[cfg(test)]
mod tests;
