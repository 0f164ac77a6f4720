//! RSA-OAEP encryption benchmark

use crate::bench::constants::{RSA_PUBLIC_EXPONENT, SHA256_DIGEST_SIZE};
use crate::bench::{timed, Operation, TimingSample};
use crate::error::{CryptoError, CryptoResult};
use rand_core::OsRng;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{BigUint, Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use std::time::Duration;
use tracing::{debug, error};

/// Largest plaintext that fits one OAEP-SHA256 block for a modulus of `key_size` bits
///
/// Returns `None` when the modulus leaves no room for any payload.
pub fn max_chunk_len(key_size: usize) -> Option<usize> {
    (key_size / 8)
        .checked_sub(2 * SHA256_DIGEST_SIZE + 2)
        .filter(|&len| len > 0)
}

/// Split `data` into consecutive chunks of at most `max_len` bytes
///
/// # Panics
///
/// Panics if `max_len` is zero.
pub fn split_into_chunks(data: &[u8], max_len: usize) -> Vec<&[u8]> {
    data.chunks(max_len).collect()
}

/// Encrypt every chunk independently with OAEP-SHA256
pub fn encrypt_chunks(
    public_key: &RsaPublicKey,
    chunks: &[&[u8]],
) -> CryptoResult<Vec<Vec<u8>>> {
    chunks
        .iter()
        .map(|chunk| {
            public_key
                .encrypt(&mut OsRng, Oaep::new::<Sha256>(), chunk)
                .map_err(|e| CryptoError::EncryptionFailed {
                    reason: format!("RSA-OAEP encryption of {} bytes failed: {}", chunk.len(), e),
                })
        })
        .collect()
}

/// Decrypt every chunk and concatenate the plaintexts
pub fn decrypt_chunks(
    private_key: &RsaPrivateKey,
    chunks: &[Vec<u8>],
) -> CryptoResult<Vec<u8>> {
    let mut plaintext = Vec::new();
    for chunk in chunks {
        let decrypted = private_key
            .decrypt(Oaep::new::<Sha256>(), chunk)
            .map_err(|e| CryptoError::DecryptionFailed {
                reason: format!("RSA-OAEP decryption failed: {}", e),
            })?;
        plaintext.extend_from_slice(&decrypted);
    }
    Ok(plaintext)
}

/// Result of one RSA benchmark iteration
#[derive(Clone)]
pub struct RsaSample {
    /// Plaintext that was encrypted
    pub input_text: String,
    /// Key pair generated for this iteration
    pub private_key: RsaPrivateKey,
    /// Public half of `private_key`
    pub public_key: RsaPublicKey,
    /// Concatenation of the per-chunk ciphertexts
    pub ciphertext: Vec<u8>,
    /// Concatenation of the per-chunk plaintexts
    pub decrypted_text: String,
    /// Number of OAEP blocks
    pub chunk_count: usize,
    /// Key generation duration
    pub keygen_time: Duration,
    /// Public key derivation and encryption of all chunks
    pub encryption_time: Duration,
    /// Decryption of all chunks
    pub decryption_time: Duration,
}

impl RsaSample {
    /// Plaintext size in bytes
    pub fn input_size(&self) -> usize {
        self.input_text.len()
    }

    /// Whether the decrypted text matches the input
    pub fn is_round_trip_exact(&self) -> bool {
        self.input_text == self.decrypted_text
    }

    /// Timings as samples, in phase order
    pub fn timings(&self) -> Vec<TimingSample> {
        let size = self.input_size();
        vec![
            TimingSample::new(size, Operation::KeyGeneration, self.keygen_time),
            TimingSample::new(size, Operation::Encryption, self.encryption_time),
            TimingSample::new(size, Operation::Decryption, self.decryption_time),
        ]
    }

    /// Private key as unencrypted PKCS#8 PEM
    pub fn private_key_pem(&self) -> CryptoResult<String> {
        self.private_key
            .to_pkcs8_pem(LineEnding::LF)
            .map(|pem| pem.as_str().to_owned())
            .map_err(|e| CryptoError::KeyExportFailed {
                reason: format!("RSA private key PEM export failed: {}", e),
            })
    }

    /// Public key as SubjectPublicKeyInfo PEM
    pub fn public_key_pem(&self) -> CryptoResult<String> {
        self.public_key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::KeyExportFailed {
                reason: format!("RSA public key PEM export failed: {}", e),
            })
    }
}

impl std::fmt::Debug for RsaSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaSample")
            .field("input_size", &self.input_size())
            .field("private_key", &"[REDACTED]")
            .field("ciphertext_len", &self.ciphertext.len())
            .field("chunk_count", &self.chunk_count)
            .field("keygen_time", &self.keygen_time)
            .field("encryption_time", &self.encryption_time)
            .field("decryption_time", &self.decryption_time)
            .finish()
    }
}

/// RSA-OAEP benchmark at a fixed modulus size
#[derive(Debug, Clone, Copy)]
pub struct RsaBenchmark {
    key_size: usize,
}

impl RsaBenchmark {
    /// Create a runner for `key_size`-bit keys
    pub fn new(key_size: usize) -> Self {
        Self { key_size }
    }

    /// Modulus size in bits
    pub fn key_size(&self) -> usize {
        self.key_size
    }

    /// Generate a key pair, encrypt `data` chunk by chunk, then decrypt it
    pub fn run(&self, data: &str) -> CryptoResult<RsaSample> {
        let max_len = max_chunk_len(self.key_size).ok_or_else(|| CryptoError::InvalidKeySize {
            key_size: self.key_size,
            reason: format!(
                "modulus of {} bytes cannot hold OAEP-SHA256 padding",
                self.key_size / 8
            ),
        })?;
        let chunks = split_into_chunks(data.as_bytes(), max_len);
        debug!(
            input_size = data.len(),
            key_size = self.key_size,
            chunks = chunks.len(),
            "Running RSA benchmark"
        );

        let exponent = BigUint::from(RSA_PUBLIC_EXPONENT);
        let (private_key, keygen_time) =
            timed(|| RsaPrivateKey::new_with_exp(&mut OsRng, self.key_size, &exponent));
        let private_key = private_key.map_err(|e| CryptoError::KeyGenerationFailed {
            algorithm: "RSA".to_string(),
            reason: e.to_string(),
        })?;

        let (encrypted, encryption_time) = timed(|| {
            let public_key = private_key.to_public_key();
            encrypt_chunks(&public_key, &chunks).map(|ciphertexts| (public_key, ciphertexts))
        });
        let (public_key, encrypted_chunks) = encrypted?;

        let (decrypted, decryption_time) =
            timed(|| decrypt_chunks(&private_key, &encrypted_chunks));
        let decrypted_text =
            String::from_utf8(decrypted?).map_err(|e| CryptoError::DecryptionFailed {
                reason: format!("Decrypted text is not valid UTF-8: {}", e),
            })?;

        Ok(RsaSample {
            input_text: data.to_string(),
            private_key,
            public_key,
            ciphertext: encrypted_chunks.concat(),
            decrypted_text,
            chunk_count: chunks.len(),
            keygen_time,
            encryption_time,
            decryption_time,
        })
    }

    /// Like [`run`](Self::run), but logs the failure and yields `None`
    pub fn try_run(&self, data: &str) -> Option<RsaSample> {
        match self.run(data) {
            Ok(sample) => Some(sample),
            Err(e) => {
                error!(
                    input_size = data.len(),
                    error = %e,
                    "An error occurred in asymmetric algorithm testing"
                );
                None
            }
        }
    }
}
