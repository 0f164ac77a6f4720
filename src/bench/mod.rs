//! Benchmark runners
//!
//! This module times the asymmetric primitives across plaintext sizes:
//! RSA-OAEP encryption and decryption, and ECDSA P-256 signing and
//! verification. Each run generates its own key pair and records the
//! wall-clock duration of every phase.

pub mod ecdsa;
pub mod rsa;
pub mod suite;

// Re-export main types for convenience
pub use self::ecdsa::{EcdsaBenchmark, EcdsaSample};
pub use self::rsa::{RsaBenchmark, RsaSample};
pub use self::suite::{BenchmarkSuite, SuiteResults};

use std::fmt;
use std::time::{Duration, Instant};

/// Common cryptographic constants
pub mod constants {
    //! Sizes used by the runners

    /// SHA-256 digest size in bytes
    pub const SHA256_DIGEST_SIZE: usize = 32;

    /// RSA public exponent used for key generation
    pub const RSA_PUBLIC_EXPONENT: u64 = 65537;
}

/// Phase of a benchmark iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Key pair generation
    KeyGeneration,
    /// RSA-OAEP encryption of every chunk
    Encryption,
    /// RSA-OAEP decryption of every chunk
    Decryption,
    /// ECDSA signing
    Signing,
    /// ECDSA verification
    Verification,
}

impl Operation {
    /// Series label used in plots
    pub fn label(&self) -> &'static str {
        match self {
            Operation::KeyGeneration => "Key Generation Time",
            Operation::Encryption => "Encryption Time",
            Operation::Decryption => "Decryption Time",
            Operation::Signing => "Signing Time",
            Operation::Verification => "Verification Time",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One measured phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    /// Plaintext size in bytes
    pub input_size: usize,
    /// Measured phase
    pub operation: Operation,
    /// Wall-clock duration
    pub elapsed: Duration,
}

impl TimingSample {
    /// Create a sample
    pub fn new(input_size: usize, operation: Operation, elapsed: Duration) -> Self {
        Self {
            input_size,
            operation,
            elapsed,
        }
    }

    /// Elapsed time in seconds
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run `f` and return its output together with the elapsed wall-clock time
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_output() {
        let (value, elapsed) = timed(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_timing_sample_seconds() {
        let sample = TimingSample::new(256, Operation::Signing, Duration::from_millis(1500));
        assert_eq!(sample.seconds(), 1.5);
        assert_eq!(sample.operation.to_string(), "Signing Time");
    }
}
