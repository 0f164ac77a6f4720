//! CSV summaries of the benchmark results

use crate::bench::{EcdsaSample, RsaSample};
use crate::error::{ReportError, ReportResult};
use csv::WriterBuilder;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Column names of the RSA table, in order
pub const RSA_COLUMNS: [&str; 9] = [
    "Input Size (bytes)",
    "Input Text",
    "Private Key",
    "Public Key",
    "Ciphertext",
    "Decrypted Text",
    "Key Generation Time (s)",
    "Encryption Time (s)",
    "Decryption Time (s)",
];

/// Column names of the ECDSA table, in order
pub const ECDSA_COLUMNS: [&str; 9] = [
    "Input Size (bytes)",
    "Input Text",
    "Private Key",
    "Public Key",
    "Signature",
    "Verification Result",
    "Key Generation Time (s)",
    "Signing Time (s)",
    "Verification Time (s)",
];

/// One row of the RSA table
#[derive(Debug, Clone, Serialize)]
pub struct RsaRow {
    /// Plaintext size in bytes
    pub input_size: usize,
    /// Plaintext
    pub input_text: String,
    /// PKCS#8 PEM
    pub private_key: String,
    /// SubjectPublicKeyInfo PEM
    pub public_key: String,
    /// Hex of the concatenated chunk ciphertexts
    pub ciphertext: String,
    /// Decrypted plaintext
    pub decrypted_text: String,
    /// Seconds
    pub keygen_time: f64,
    /// Seconds
    pub encryption_time: f64,
    /// Seconds
    pub decryption_time: f64,
}

impl RsaRow {
    /// Build a row, exporting both keys to PEM
    pub fn from_sample(input_size: usize, sample: &RsaSample) -> ReportResult<Self> {
        let invalid = |e: crate::error::CryptoError| ReportError::InvalidRow {
            input_size,
            reason: e.to_string(),
        };

        Ok(Self {
            input_size,
            input_text: sample.input_text.clone(),
            private_key: sample.private_key_pem().map_err(invalid)?,
            public_key: sample.public_key_pem().map_err(invalid)?,
            ciphertext: hex::encode(&sample.ciphertext),
            decrypted_text: sample.decrypted_text.clone(),
            keygen_time: sample.keygen_time.as_secs_f64(),
            encryption_time: sample.encryption_time.as_secs_f64(),
            decryption_time: sample.decryption_time.as_secs_f64(),
        })
    }
}

/// One row of the ECDSA table
#[derive(Debug, Clone, Serialize)]
pub struct EcdsaRow {
    /// Message size in bytes
    pub input_size: usize,
    /// Message
    pub input_text: String,
    /// PKCS#8 PEM
    pub private_key: String,
    /// SubjectPublicKeyInfo PEM
    pub public_key: String,
    /// Hex of the DER signature
    pub signature: String,
    /// Verification outcome
    pub verification_result: bool,
    /// Seconds
    pub keygen_time: f64,
    /// Seconds
    pub signing_time: f64,
    /// Seconds
    pub verification_time: f64,
}

impl EcdsaRow {
    /// Build a row, exporting both keys to PEM
    pub fn from_sample(input_size: usize, sample: &EcdsaSample) -> ReportResult<Self> {
        let invalid = |e: crate::error::CryptoError| ReportError::InvalidRow {
            input_size,
            reason: e.to_string(),
        };

        Ok(Self {
            input_size,
            input_text: sample.input_text.clone(),
            private_key: sample.private_key_pem().map_err(invalid)?,
            public_key: sample.public_key_pem().map_err(invalid)?,
            signature: hex::encode(&sample.signature),
            verification_result: sample.verification_result,
            keygen_time: sample.keygen_time.as_secs_f64(),
            signing_time: sample.signing_time.as_secs_f64(),
            verification_time: sample.verification_time.as_secs_f64(),
        })
    }
}

/// Keep the rows that could be built, logging the rest
fn collect_rows<S, R>(
    results: &BTreeMap<usize, S>,
    build: impl Fn(usize, &S) -> ReportResult<R>,
) -> Vec<R> {
    results
        .iter()
        .filter_map(|(&size, sample)| match build(size, sample) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(input_size = size, error = %e, "Skipping CSV row");
                None
            }
        })
        .collect()
}

fn write_rows<R: Serialize>(columns: &[&str], rows: &[R], path: &Path) -> ReportResult<usize> {
    let csv_err = |e: csv::Error| ReportError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(columns).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| ReportError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), rows = rows.len(), "Wrote CSV");
    Ok(rows.len())
}

/// Write the RSA table; returns the number of data rows written
pub fn write_rsa_results(
    results: &BTreeMap<usize, RsaSample>,
    path: &Path,
) -> ReportResult<usize> {
    let rows = collect_rows(results, RsaRow::from_sample);
    write_rows(&RSA_COLUMNS, &rows, path)
}

/// Write the ECDSA table; returns the number of data rows written
pub fn write_ecdsa_results(
    results: &BTreeMap<usize, EcdsaSample>,
    path: &Path,
) -> ReportResult<usize> {
    let rows = collect_rows(results, EcdsaRow::from_sample);
    write_rows(&ECDSA_COLUMNS, &rows, path)
}
