//! Symmetric encryption for agent log lines.
//!
//! Uses AES-256-GCM with a key generated fresh for every process run. The key
//! lives only in memory and is discarded at exit, so blobs from one run are
//! undecryptable by any other process. Blobs are `BASE64(nonce || ciphertext)`
//! so they can travel inside JSON strings.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::RngCore;

/// Key length in bytes (256 bits for AES-256)
pub const KEY_LENGTH: usize = 32;

/// Nonce length in bytes (96 bits for AES-GCM)
const NONCE_LENGTH: usize = 12;

#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    #[error("encryption failed")]
    Encrypt,

    #[error("blob is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("blob too short to contain a nonce")]
    Truncated,

    #[error("authentication failed: wrong key or corrupted blob")]
    AuthenticationFailed,

    #[error("decrypted payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encryption context for one process run.
///
/// Immutable after construction; the three roster log lines of a run are
/// encrypted under the same context, and only that context can decrypt them.
pub struct LogCipher {
    cipher: Aes256Gcm,
}

impl LogCipher {
    /// Create a cipher with a fresh random 256-bit key.
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LENGTH];
        rand::thread_rng().fill_bytes(&mut key);
        Self::from_key(key)
    }

    /// Create a cipher from existing key material.
    pub fn from_key(key: [u8; KEY_LENGTH]) -> Self {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
        Self { cipher }
    }

    /// Encrypt a UTF-8 log line into a transport-safe blob.
    ///
    /// A random nonce is drawn per call, so encrypting the same plaintext
    /// twice yields different blobs.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| CipherError::Encrypt)?;

        let mut combined = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        combined.extend_from_slice(&nonce_bytes);
        combined.extend_from_slice(&ciphertext);

        Ok(BASE64.encode(&combined))
    }

    /// Decrypt a blob produced by [`encrypt`](Self::encrypt) under the same key.
    ///
    /// Fails with `AuthenticationFailed` for blobs produced under another key
    /// or tampered with in transit.
    pub fn decrypt(&self, blob: &str) -> Result<String, CipherError> {
        let combined = BASE64.decode(blob.trim())?;
        if combined.len() < NONCE_LENGTH {
            return Err(CipherError::Truncated);
        }

        let (nonce_bytes, ciphertext) = combined.split_at(NONCE_LENGTH);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CipherError::AuthenticationFailed)?;

        Ok(String::from_utf8(plaintext)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> [u8; KEY_LENGTH] {
        let mut key = [0u8; KEY_LENGTH];
        for (i, byte) in key.iter_mut().enumerate() {
            *byte = i as u8;
        }
        key
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let cipher = LogCipher::from_key(test_key());
        let plaintext = "AgentA is processing task ID: 42";

        let blob = cipher.encrypt(plaintext).unwrap();
        assert_eq!(cipher.decrypt(&blob).unwrap(), plaintext);
    }

    #[test]
    fn different_encryptions_differ() {
        let cipher = LogCipher::from_key(test_key());

        let blob1 = cipher.encrypt("same-line").unwrap();
        let blob2 = cipher.encrypt("same-line").unwrap();

        // Different random nonces should produce different blobs
        assert_ne!(blob1, blob2);

        // But both should decrypt to the same value
        assert_eq!(cipher.decrypt(&blob1).unwrap(), "same-line");
        assert_eq!(cipher.decrypt(&blob2).unwrap(), "same-line");
    }

    #[test]
    fn foreign_key_fails_authentication() {
        let blob = LogCipher::generate().encrypt("secret log").unwrap();
        let other = LogCipher::generate();

        assert!(matches!(
            other.decrypt(&blob),
            Err(CipherError::AuthenticationFailed)
        ));
    }

    #[test]
    fn tampered_blob_fails_authentication() {
        let cipher = LogCipher::from_key(test_key());
        let blob = cipher.encrypt("secret log").unwrap();

        let mut combined = BASE64.decode(&blob).unwrap();
        let last = combined.len() - 1;
        combined[last] ^= 0x01;
        let tampered = BASE64.encode(&combined);

        assert!(matches!(
            cipher.decrypt(&tampered),
            Err(CipherError::AuthenticationFailed)
        ));
    }

    #[test]
    fn garbage_blob_is_rejected() {
        let cipher = LogCipher::from_key(test_key());

        assert!(matches!(
            cipher.decrypt("%%% not base64 %%%"),
            Err(CipherError::Encoding(_))
        ));
        // "AAAA" decodes to 3 bytes, shorter than a nonce
        assert!(matches!(
            cipher.decrypt("AAAA"),
            Err(CipherError::Truncated)
        ));
    }

    #[test]
    fn unicode_roundtrip() {
        let cipher = LogCipher::from_key(test_key());
        let plaintext = "AgentB 正在处理任务ID: 42 🎉";

        let blob = cipher.encrypt(plaintext).unwrap();
        assert_eq!(cipher.decrypt(&blob).unwrap(), plaintext);
    }

    #[test]
    fn empty_string_roundtrip() {
        let cipher = LogCipher::from_key(test_key());

        let blob = cipher.encrypt("").unwrap();
        assert_eq!(cipher.decrypt(&blob).unwrap(), "");
    }
}
