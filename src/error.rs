//! Error types for cipherkit

use std::collections::BTreeMap;
use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// Main error type for cipher operations
#[derive(Error, Debug)]
pub enum CryptError {
    /// Key material absent or of the wrong length for the cipher
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// IV length does not match the cipher block size
    #[error("Invalid IV: expected {expected} bytes, got {actual}")]
    InvalidIv { expected: usize, actual: usize },

    /// Buffer is not a whole number of blocks
    #[error("Input length {len} is not a multiple of the block size {block_size}")]
    BlockAlignment { len: usize, block_size: usize },

    /// Padding is inconsistent with the decrypted data
    #[error("Unpadding error: {0}")]
    Unpadding(String),

    /// Malformed hex or base64 input
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Decrypted bytes are not valid UTF-8 text
    #[error("Invalid plaintext: {0}")]
    InvalidPlaintext(#[from] std::string::FromUtf8Error),
}

impl From<hex::FromHexError> for CryptError {
    fn from(err: hex::FromHexError) -> Self {
        CryptError::Encoding(err.to_string())
    }
}

impl From<base64::DecodeError> for CryptError {
    fn from(err: base64::DecodeError) -> Self {
        CryptError::Encoding(err.to_string())
    }
}

/// Result type alias for cipher operations
pub type Result<T> = std::result::Result<T, CryptError>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error enriched with a numeric code, a remark, the caller location and
/// free-form key/value context.
///
/// Used by layers sitting on top of the ciphers (such as the database
/// credential loader) where the raw error alone does not say enough.
#[derive(Debug)]
pub struct AppError {
    /// Underlying error, if any
    pub original: Option<BoxError>,
    /// Application specific error code
    pub code: Option<i32>,
    /// Human readable remark
    pub remark: String,
    /// Source file where the error was raised
    pub file: String,
    /// Source line where the error was raised
    pub line: u32,
    /// Additional context
    pub context: BTreeMap<String, String>,
}

impl AppError {
    /// Wrap an existing error with a code
    #[track_caller]
    pub fn new<E>(err: E, code: i32) -> Self
    where
        E: Into<BoxError>,
    {
        Self::at(Location::caller(), Some(err.into()), Some(code))
    }

    /// Create an error carrying only a code
    #[track_caller]
    pub fn with_code(code: i32) -> Self {
        Self::at(Location::caller(), None, Some(code))
    }

    fn at(location: &Location<'_>, original: Option<BoxError>, code: Option<i32>) -> Self {
        let file = location
            .file()
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            original,
            code,
            remark: String::new(),
            file,
            line: location.line(),
            context: BTreeMap::new(),
        }
    }

    /// Attach a remark
    pub fn rem(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    /// Attach a context value
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Render as `file:line/Err-code/remark/original/key=value/`
    pub fn dump(&self) -> String {
        let mut out = String::new();

        if !self.file.is_empty() {
            out.push_str(&format!("{}:{}/", self.file, self.line));
        }

        if let Some(code) = self.code {
            out.push_str(&format!("Err-{}/", code));
        }

        if !self.remark.is_empty() {
            out.push_str(&self.remark);
            out.push('/');
        }

        if let Some(original) = &self.original {
            let message = original.to_string();
            if message != self.remark {
                out.push_str(&message);
                out.push('/');
            }
        }

        for (key, value) in &self.context {
            out.push_str(&format!("{}={}/", key, value));
        }

        out
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.original
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
