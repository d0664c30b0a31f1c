//! Cross-cipher tests for the crypto module

use super::*;
use crate::error::CryptError;

// ASCII plus Cyrillic, so multi-byte UTF-8 crosses block boundaries
const TEST_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz\
    0123456789_!@#$%^&*()<>,./?ЙЦУКЕНГШЩЗФЫВАПРОЛДЯЧСМИТЬБЮйцукенгшщзхъфывапролджэёячсмитьбю";

const PADDINGS: [Padding; 3] = [Padding::Zero, Padding::Pkcs5, Padding::Pkcs7];

fn random_string(len: usize) -> String {
    use rand::Rng;
    let mut rng = rand::rng();
    let chars: Vec<char> = TEST_CHARS.chars().collect();
    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

fn random_bytes(len: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

/// Random secrets of 1..100 bytes and texts of 1..1000 chars
#[test]
fn test_stress_triple_des() {
    use rand::Rng;
    let mut rng = rand::rng();

    for i in 0..100 {
        let secret = random_string(rng.random_range(1..100));
        let plaintext = random_string(rng.random_range(1..1000));

        for padding in PADDINGS {
            let encrypted = triple_des_encrypt(&plaintext, secret.as_bytes(), padding)
                .unwrap_or_else(|e| panic!("Encryption failed, iteration {}: {}", i, e));
            let decrypted = triple_des_decrypt(&encrypted, secret.as_bytes(), padding)
                .unwrap_or_else(|e| panic!("Decryption failed, iteration {}: {}", i, e));

            assert_eq!(decrypted, plaintext, "Mismatch at iteration {} ({:?})", i, padding);
        }
    }
}

#[test]
fn test_stress_des() {
    use rand::Rng;
    let mut rng = rand::rng();

    for i in 0..100 {
        let key = random_bytes(8);
        let plaintext = random_string(rng.random_range(1..500));

        for padding in PADDINGS {
            let encrypted = des_encrypt(&plaintext, &key, padding)
                .unwrap_or_else(|e| panic!("Encryption failed, iteration {}: {}", i, e));
            let decrypted = des_decrypt(&encrypted, &key, padding)
                .unwrap_or_else(|e| panic!("Decryption failed, iteration {}: {}", i, e));

            assert_eq!(decrypted, plaintext, "Mismatch at iteration {} ({:?})", i, padding);
        }
    }
}

#[test]
fn test_stress_aes_binary() {
    use rand::Rng;
    let mut rng = rand::rng();

    for i in 0..100 {
        let key = random_bytes([16, 24, 32][i % 3]);
        let iv = random_bytes(16);
        let plaintext = random_bytes(rng.random_range(0..2000));

        for padding in [Padding::Pkcs5, Padding::Pkcs7] {
            let encrypted = aes_encrypt(&plaintext, &key, &iv, padding).unwrap();
            assert_eq!(encrypted.len() % 16, 0);

            let decrypted = aes_decrypt(&encrypted, &key, &iv, padding).unwrap();
            assert_eq!(decrypted, plaintext, "Mismatch at iteration {}", i);
        }
    }
}

#[test]
fn test_wrong_secret_fails_or_differs() {
    let encrypted = triple_des_encrypt("Secret message", b"correct secret", Padding::Pkcs5).unwrap();

    // Wrong key either breaks the padding or yields different bytes
    match triple_des_decrypt(&encrypted, b"wrong secret", Padding::Pkcs5) {
        Ok(decrypted) => assert_ne!(decrypted, "Secret message"),
        Err(CryptError::Unpadding(_)) | Err(CryptError::InvalidPlaintext(_)) => {}
        Err(e) => panic!("Unexpected error: {}", e),
    }
}

#[test]
fn test_mismatched_padding_zero_then_pkcs() {
    // "abc" + five zero bytes: last byte 0 claims no padding
    let encrypted = des_encrypt("abc", b"12345678", Padding::Zero).unwrap();
    let decrypted = des_decrypt(&encrypted, b"12345678", Padding::Pkcs5).unwrap();
    assert_eq!(decrypted, "abc\0\0\0\0\0");
}

#[test]
fn test_unchained_vs_chained_repetition() {
    let block = "RepeatMe";
    let plaintext = block.repeat(4);

    let des_hex = des_encrypt(&plaintext, b"deskey!!", Padding::Pkcs5).unwrap();
    let des_bytes = Encoding::Hex.decode(&des_hex).unwrap();
    assert!(des_bytes[..32].chunks(8).all(|c| c == &des_bytes[..8]));

    let tdes_b64 = triple_des_encrypt(&plaintext, b"deskey!!", Padding::Pkcs5).unwrap();
    let tdes_bytes = Encoding::Base64.decode(&tdes_b64).unwrap();
    assert_ne!(tdes_bytes[..8], tdes_bytes[8..16]);
}

#[test]
fn test_non_utf8_plaintext_is_reported() {
    // Encrypt raw bytes through the mode layer, then ask for text back
    let key = normalize_triple_des_key(b"testkey").unwrap();
    let encrypted = cbc_transform::<::des::TdesEde3>(
        Direction::Encrypt,
        &[0xff, 0xfe, 0xfd],
        &key,
        &key[..crate::DES_BLOCK_SIZE],
        Padding::Pkcs5,
    )
    .unwrap();

    let err = triple_des_decrypt(&Encoding::Base64.encode(&encrypted), b"testkey", Padding::Pkcs5)
        .unwrap_err();
    assert!(matches!(err, CryptError::InvalidPlaintext(_)));
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let plaintext = format!("thread {} payload", i);
                let encrypted = triple_des_encrypt(&plaintext, b"shared", Padding::Pkcs7).unwrap();
                let decrypted = triple_des_decrypt(&encrypted, b"shared", Padding::Pkcs7).unwrap();
                assert_eq!(decrypted, plaintext);
                encrypted
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected = triple_des_encrypt("thread 0 payload", b"shared", Padding::Pkcs7).unwrap();
    assert_eq!(results[0], expected);
}
