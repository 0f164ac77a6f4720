//! Error types for the cipher benchmark
//!
//! This module provides a unified error handling system using `thiserror` for
//! the benchmark runners, the image cipher demo and the report writers.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the cipher benchmark
#[derive(Error, Debug)]
pub enum Error {
    /// Cryptographic operation errors
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Image loading, encryption or saving errors
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Plot and CSV report errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration
        message: String,
    },
}

/// Errors raised by the RSA, ECDSA and AES calls
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The key size cannot hold a single OAEP-SHA256 block
    #[error("Key size {key_size} too small: {reason}")]
    InvalidKeySize {
        /// Requested modulus size in bits
        key_size: usize,
        /// Underlying cause
        reason: String,
    },

    /// Key generation failed
    #[error("{algorithm} key generation failed: {reason}")]
    KeyGenerationFailed {
        /// Algorithm whose key pair was requested
        algorithm: String,
        /// Underlying cause
        reason: String,
    },

    /// Encryption failed
    #[error("Encryption failed: {reason}")]
    EncryptionFailed {
        /// Underlying cause
        reason: String,
    },

    /// Decryption failed
    #[error("Decryption failed: {reason}")]
    DecryptionFailed {
        /// Underlying cause
        reason: String,
    },

    /// Signing failed
    #[error("Signing failed: {reason}")]
    SigningFailed {
        /// Underlying cause
        reason: String,
    },

    /// Signature bytes could not be parsed
    #[error("Invalid signature: {reason}")]
    InvalidSignature {
        /// Underlying cause
        reason: String,
    },

    /// Key could not be exported to PEM
    #[error("Key export failed: {reason}")]
    KeyExportFailed {
        /// Underlying cause
        reason: String,
    },

    /// Key or IV of the wrong length
    #[error("Invalid key material: {reason}")]
    InvalidKeyMaterial {
        /// Underlying cause
        reason: String,
    },
}

/// Image demo errors
#[derive(Error, Debug)]
pub enum ImageError {
    /// Input image does not exist
    #[error("Image file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Image could not be decoded
    #[error("Failed to decode image: {reason}")]
    DecodeFailed {
        /// Underlying cause
        reason: String,
    },

    /// Image could not be written
    #[error("Failed to save image to {}: {reason}", path.display())]
    SaveFailed {
        /// Destination path
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// Pixel buffer does not match the stored geometry
    #[error("Pixel buffer length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Byte length implied by width and height
        expected: usize,
        /// Byte length of the buffer
        actual: usize,
    },

    /// Cipher failure while processing pixel bytes
    #[error("Image cipher failed: {0}")]
    Cipher(#[from] CryptoError),
}

/// Report writer errors
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV writing failed
    #[error("CSV write failed for {}: {reason}", path.display())]
    Csv {
        /// Destination CSV file
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// Plot rendering failed
    #[error("Plot rendering failed for {}: {reason}", path.display())]
    Plot {
        /// Destination PNG file
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// Row could not be built from a sample
    #[error("Invalid report row for input size {input_size}: {reason}")]
    InvalidRow {
        /// Bucket the row was built for
        input_size: usize,
        /// Underlying cause
        reason: String,
    },
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience type alias for crypto Results
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;

/// Convenience type alias for image Results
pub type ImageResult<T> = std::result::Result<T, ImageError>;

/// Convenience type alias for report Results
pub type ReportResult<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let crypto_error = CryptoError::InvalidKeySize {
            key_size: 512,
            reason: "no room for OAEP padding".to_string(),
        };
        let error = Error::Crypto(crypto_error);
        assert!(error.to_string().contains("Crypto error"));
        assert!(error.to_string().contains("512"));
    }

    #[test]
    fn test_image_error_from_crypto() {
        let error: ImageError = CryptoError::InvalidKeyMaterial {
            reason: "short key".to_string(),
        }
        .into();
        assert!(error.to_string().contains("short key"));

        let missing = ImageError::NotFound {
            path: PathBuf::from("missing.jpg"),
        };
        assert!(missing.to_string().contains("missing.jpg"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration {
            message: "input_sizes must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: input_sizes must not be empty"
        );
    }
}
