//! HMAC-SHA256 request signing

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::encoding::Encoding;

type HmacSha256 = Hmac<Sha256>;

/// Sign `input` with HMAC-SHA256 under `secret`.
///
/// Returns the base64 signature, query-escaped so it can be placed directly
/// in a URL or header parameter.
///
/// # Example
///
/// ```
/// use cipherkit::crypto::hmac_sign;
///
/// let signature = hmac_sign("date: Mon, 02 Jan 2006", "secret");
/// assert!(!signature.contains('+') && !signature.contains('/'));
/// ```
pub fn hmac_sign(input: &str, secret: &str) -> String {
    // HMAC hashes long keys and zero-pads short ones, so no length is rejected
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(input.as_bytes());

    let signature = Encoding::Base64.encode(&mac.finalize().into_bytes());
    url::form_urlencoded::byte_serialize(signature.as_bytes()).collect()
}
