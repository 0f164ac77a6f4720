//! AES-256-CFB encryption/decryption

use crate::error::{CryptoError, CryptoResult};
use aes::Aes256;
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use cfb_mode::{Decryptor, Encryptor};

/// AES-256 key size in bytes
pub const AES_KEY_SIZE: usize = 32;

/// AES block and IV size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

type Aes256CfbEnc = Encryptor<Aes256>;
type Aes256CfbDec = Decryptor<Aes256>;

/// AES-CFB encryption/decryption utilities
///
/// CFB is a stream mode: ciphertext length equals plaintext length and no
/// padding is applied.
pub struct AesCfb;

impl AesCfb {
    /// Encrypt data with AES-256-CFB
    pub fn encrypt(data: &[u8], key: &[u8], iv: &[u8]) -> CryptoResult<Vec<u8>> {
        let cipher =
            Aes256CfbEnc::new_from_slices(key, iv).map_err(|_| Self::invalid_length(key, iv))?;
        let mut buffer = data.to_vec();
        cipher.encrypt(&mut buffer);
        Ok(buffer)
    }

    /// Decrypt data with AES-256-CFB
    pub fn decrypt(encrypted_data: &[u8], key: &[u8], iv: &[u8]) -> CryptoResult<Vec<u8>> {
        let cipher =
            Aes256CfbDec::new_from_slices(key, iv).map_err(|_| Self::invalid_length(key, iv))?;
        let mut buffer = encrypted_data.to_vec();
        cipher.decrypt(&mut buffer);
        Ok(buffer)
    }

    fn invalid_length(key: &[u8], iv: &[u8]) -> CryptoError {
        CryptoError::InvalidKeyMaterial {
            reason: format!(
                "expected {}-byte key and {}-byte IV, got {} and {}",
                AES_KEY_SIZE,
                AES_BLOCK_SIZE,
                key.len(),
                iv.len()
            ),
        }
    }
}

/// AES key management utilities
pub mod key_utils {
    use super::*;
    use rand::RngCore;

    /// Generate a random AES-256 key
    pub fn generate_key() -> [u8; AES_KEY_SIZE] {
        let mut key = [0u8; AES_KEY_SIZE];
        rand::rng().fill_bytes(&mut key);
        key
    }

    /// Generate a random IV
    pub fn generate_iv() -> [u8; AES_BLOCK_SIZE] {
        let mut iv = [0u8; AES_BLOCK_SIZE];
        rand::rng().fill_bytes(&mut iv);
        iv
    }
}
