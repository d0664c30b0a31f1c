//! Database configuration with encrypted credentials
//!
//! The stored password is Triple-DES/PKCS#5 ciphertext (base64) keyed by the
//! username: uppercase username repeated twice. When no URL is configured,
//! the password is decrypted and a URL of the form
//! `user:password@(host)/schema` is built.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ERR_CONFIG, ERR_CREDENTIALS};
use crate::crypto::{Padding, triple_des_decrypt, triple_des_encrypt};
use crate::error::AppError;

/// Database connection settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Driver name, e.g. `sqlite`
    #[serde(rename = "Type")]
    pub driver: String,
    /// Connection URL; resolved from the credentials when empty
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Username")]
    pub username: String,
    /// Encrypted password (see [`encrypt_password`])
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Host")]
    pub host: String,
    #[serde(rename = "Schema")]
    pub schema: String,
    /// Named SQL commands
    #[serde(rename = "SQLCommand")]
    pub sql: HashMap<String, String>,
}

impl DbConfig {
    /// Load a JSON configuration file and resolve its URL
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(e, ERR_CONFIG)
                .rem("cannot read database config")
                .set("file", path.display().to_string())
        })?;

        Self::from_json(&json).map_err(|e| e.set("file", path.display().to_string()))
    }

    /// Parse a JSON configuration and resolve its URL
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let mut config: DbConfig = serde_json::from_str(json)
            .map_err(|e| AppError::new(e, ERR_CONFIG).rem("invalid database config"))?;

        if config.url.is_empty() {
            config.url = config.resolve_url()?;
        }

        Ok(config)
    }

    /// Decrypt the stored password and build the connection URL
    pub fn resolve_url(&self) -> Result<String, AppError> {
        let key = credential_key(&self.username);

        match triple_des_decrypt(&self.password, key.as_bytes(), Padding::Pkcs5) {
            Ok(password) => {
                log::debug!("resolved database url for {}@{}", self.username, self.host);
                Ok(format!(
                    "{}:{}@({})/{}",
                    self.username, password, self.host, self.schema
                ))
            }
            Err(err) => {
                // Only the username: the stored value may be a clear-text password
                log::warn!(
                    "database password for {} does not decrypt, store the output of encrypt_password instead",
                    self.username
                );

                Err(AppError::new(err, ERR_CREDENTIALS)
                    .rem("cannot decrypt database password")
                    .set("username", self.username.as_str()))
            }
        }
    }
}

/// Secret used to encrypt a user's stored password
pub fn credential_key(username: &str) -> String {
    username.to_uppercase().repeat(2)
}

/// Encrypt a clear-text password for storage in a [`DbConfig`]
pub fn encrypt_password(username: &str, password: &str) -> crate::Result<String> {
    triple_des_encrypt(password, credential_key(username).as_bytes(), Padding::Pkcs5)
}
