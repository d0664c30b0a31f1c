//! Random hex strings
//!
//! Uses the thread-local generator from `rand` (seeded from the OS and
//! reseeded by the library itself), or a caller-supplied cryptographic RNG.

use rand::{CryptoRng, RngCore};

use super::encoding::Encoding;

/// Generate `n` random bytes and return them hex encoded (`2 * n` chars)
pub fn random_hex(n: usize) -> String {
    random_hex_with(&mut rand::rng(), n)
}

/// Same as [`random_hex`] with an explicit generator
pub fn random_hex_with<R>(rng: &mut R, n: usize) -> String
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut bytes = vec![0u8; n];
    rng.fill_bytes(&mut bytes);
    Encoding::Hex.encode(&bytes)
}
