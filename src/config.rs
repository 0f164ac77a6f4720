//! Benchmark configuration
//!
//! All knobs are plain constants; there is no command line surface. Tests
//! override fields with struct-update syntax.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Output file names written into [`BenchConfig::output_dir`]
pub mod files {
    /// RSA timing plot
    pub const RSA_PLOT: &str = "asymmetric_performance.png";
    /// ECDSA timing plot
    pub const ECDSA_PLOT: &str = "ecdsa_performance.png";
    /// RSA results table
    pub const RSA_CSV: &str = "asymmetric_algorithm_results.csv";
    /// ECDSA results table
    pub const ECDSA_CSV: &str = "ecdsa_algorithm_results.csv";
    /// Ciphertext rendered as pixels
    pub const ENCRYPTED_IMAGE: &str = "encrypted_image.png";
    /// Round-tripped image
    pub const DECRYPTED_IMAGE: &str = "decrypted_image.png";
}

/// Default RSA modulus size in bits
pub const DEFAULT_KEY_SIZE: usize = 2048;

/// Default plaintext sizes in bytes
pub const DEFAULT_INPUT_SIZES: [usize; 5] = [256, 512, 1024, 2048, 4096];

/// Default input image for the AES demo
pub const DEFAULT_IMAGE_PATH: &str = "input_image.jpg";

/// Benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// RSA modulus size in bits
    pub key_size: usize,
    /// Plaintext sizes to sweep, in bytes
    pub input_sizes: Vec<usize>,
    /// Image encrypted by the AES-CFB demo
    pub image_path: PathBuf,
    /// Directory receiving plots, tables and images
    pub output_dir: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            key_size: DEFAULT_KEY_SIZE,
            input_sizes: DEFAULT_INPUT_SIZES.to_vec(),
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            output_dir: PathBuf::from("."),
        }
    }
}

impl BenchConfig {
    /// Check the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if self.key_size == 0 {
            return Err(Error::Configuration {
                message: "RSA key size must be non-zero".to_string(),
            });
        }

        if self.input_sizes.is_empty() {
            return Err(Error::Configuration {
                message: "at least one input size is required".to_string(),
            });
        }

        if self.input_sizes.contains(&0) {
            return Err(Error::Configuration {
                message: "input sizes must be non-zero".to_string(),
            });
        }

        Ok(())
    }

    /// Resolve an output file name against the output directory
    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
