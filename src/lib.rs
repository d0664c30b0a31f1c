//! # cipherkit
//!
//! Symmetric encryption helpers for short secrets such as stored database
//! passwords.
//!
//! ## Features
//!
//! - Triple-DES (EDE3) CBC with a key derived from any non-empty secret, base64 output
//! - Single DES, block by block, hex output
//! - AES-128/192/256 CBC with a caller supplied IV, raw output
//! - Zero and PKCS#5/PKCS#7 padding, selected per call
//! - HMAC-SHA256 signing and random hex strings
//! - Database configuration loader that decrypts stored passwords
//!
//! ## Compatibility warnings
//!
//! Triple-DES uses the first 8 key bytes as its IV, and DES has no chaining.
//! Both are kept bit-compatible with ciphertext already in use; neither gives
//! semantic security.
//!
//! ## Example
//!
//! ```
//! use cipherkit::crypto::{triple_des_encrypt, triple_des_decrypt, Padding};
//!
//! let encrypted = triple_des_encrypt("Hello, World!", b"testkey", Padding::Pkcs5).unwrap();
//! assert_eq!(encrypted, "8vvkvTAz6eLLJtnVtjdpXQ==");
//!
//! let decrypted = triple_des_decrypt(&encrypted, b"testkey", Padding::Pkcs5).unwrap();
//! assert_eq!(decrypted, "Hello, World!");
//! ```

pub mod crypto;
pub mod database;
pub mod error;

// Re-export main types
pub use crypto::{
    Encoding, Padding, aes_decrypt, aes_encrypt, des_decrypt, des_encrypt, triple_des_decrypt,
    triple_des_encrypt,
};
pub use database::{Database, DbConfig};
pub use error::{AppError, CryptError, Result};

/// DES and Triple-DES block size
pub const DES_BLOCK_SIZE: usize = 8;

/// AES block size (also the required IV length)
pub const AES_BLOCK_SIZE: usize = 16;

/// Single DES key length
pub const DES_KEY_LENGTH: usize = 8;
