//! # cipher-bench
//!
//! Timing harness for asymmetric and symmetric primitives from the RustCrypto
//! crates. All cryptography is delegated to `rsa`, `p256`, `aes` and
//! `cfb-mode`; this crate only generates inputs, times the calls and writes
//! the results out.
//!
//! ## Features
//!
//! - **Bench Module**: RSA-OAEP (SHA-256) and ECDSA P-256 runners swept over plaintext sizes
//! - **Image Cipher Module**: AES-256-CFB encryption of an image's raw RGB pixel bytes
//! - **Report Module**: PNG timing plots and CSV summaries with PEM keys
//!
//! ## Optional Features
//!
//! - `plot`: render timing charts with `plotters` (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use cipher_bench::bench::EcdsaBenchmark;
//! use cipher_bench::data::generate_random_data;
//!
//! let message = generate_random_data(256);
//! let sample = EcdsaBenchmark::new().run(&message)?;
//! assert!(sample.verification_result);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result};

// Core modules
pub mod bench;
pub mod config;
pub mod data;
pub mod error;
pub mod image_cipher;
pub mod report;

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::bench::{BenchmarkSuite, EcdsaBenchmark, RsaBenchmark, SuiteResults};
    pub use crate::config::BenchConfig;
    pub use crate::error::{CryptoError, Error, ImageError, ReportError, Result};
    pub use crate::image_cipher::{decrypt_image, encrypt_image, AesCfb};
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
