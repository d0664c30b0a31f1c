//! Database layer
//!
//! Handles:
//! - Loading connection settings with Triple-DES encrypted passwords
//! - A thin SQLite wrapper with named SQL commands

pub mod config;
pub mod connection;

pub use config::{DbConfig, credential_key, encrypt_password};
pub use connection::{Database, Row};

/// Configuration could not be read or parsed
pub const ERR_CONFIG: i32 = 100;

/// Stored password could not be decrypted
pub const ERR_CREDENTIALS: i32 = 101;

/// Database could not be opened
pub const ERR_CONNECTION: i32 = 102;

/// SQL statement failed
pub const ERR_QUERY: i32 = 103;

/// Driver other than SQLite requested
pub const ERR_UNSUPPORTED_DRIVER: i32 = 104;

/// Operation on a closed database
pub const ERR_NOT_OPEN: i32 = 105;
