//! Text encodings for ciphertext transport

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;

/// Display-safe representation of raw ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Lowercase hexadecimal (decoding accepts either case)
    Hex,
    /// Standard base64 alphabet with `=` padding
    Base64,
}

impl Encoding {
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => hex::encode(bytes),
            Encoding::Base64 => STANDARD.encode(bytes),
        }
    }

    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let bytes = match self {
            Encoding::Hex => hex::decode(text)?,
            Encoding::Base64 => STANDARD.decode(text)?,
        };
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryptError;

    #[test]
    fn test_hex() {
        assert_eq!(Encoding::Hex.encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
        assert_eq!(Encoding::Hex.decode("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_base64() {
        assert_eq!(Encoding::Base64.encode(b"Hello"), "SGVsbG8=");
        assert_eq!(Encoding::Base64.decode("SGVsbG8=").unwrap(), b"Hello");
    }

    #[test]
    fn test_empty() {
        assert_eq!(Encoding::Hex.encode(&[]), "");
        assert!(Encoding::Base64.decode("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(Encoding::Hex.decode("abc"), Err(CryptError::Encoding(_))));
        assert!(matches!(Encoding::Hex.decode("zz"), Err(CryptError::Encoding(_))));
        assert!(matches!(Encoding::Base64.decode("SGVsbG8"), Err(CryptError::Encoding(_))));
        assert!(matches!(Encoding::Base64.decode("@@@@"), Err(CryptError::Encoding(_))));
    }
}
