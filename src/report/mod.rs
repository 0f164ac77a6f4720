//! Report writers
//!
//! Plots the timing curves and writes the CSV summaries for a finished
//! benchmark sweep. Every output is attempted independently: a failure is
//! logged and the remaining outputs are still written.

pub mod csv;
pub mod plot;

pub use self::csv::{write_ecdsa_results, write_rsa_results, EcdsaRow, RsaRow};
pub use self::plot::{plot_ecdsa_results, plot_rsa_results};

use crate::bench::SuiteResults;
use crate::config::{files, BenchConfig};
use crate::error::ReportResult;
use std::path::PathBuf;
use tracing::{error, info};

fn record(written: &mut Vec<PathBuf>, path: PathBuf, result: ReportResult<()>) {
    match result {
        Ok(()) => {
            info!(path = %path.display(), "Report written");
            written.push(path);
        }
        Err(e) => error!(error = %e, "Failed to write report"),
    }
}

/// Write both plots and both CSV files; returns the paths that were written
pub fn write_all(results: &SuiteResults, config: &BenchConfig) -> Vec<PathBuf> {
    let mut written = Vec::new();

    let path = config.output_path(files::RSA_PLOT);
    let result = plot_rsa_results(&results.rsa, &path);
    record(&mut written, path, result);

    let path = config.output_path(files::ECDSA_PLOT);
    let result = plot_ecdsa_results(&results.ecdsa, &path);
    record(&mut written, path, result);

    let path = config.output_path(files::RSA_CSV);
    let result = write_rsa_results(&results.rsa, &path).map(|_| ());
    record(&mut written, path, result);

    let path = config.output_path(files::ECDSA_CSV);
    let result = write_ecdsa_results(&results.ecdsa, &path).map(|_| ());
    record(&mut written, path, result);

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_all_csv_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let config = BenchConfig {
            output_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        let written = write_all(&SuiteResults::default(), &config);
        assert!(written.contains(&config.output_path(files::RSA_CSV)));
        assert!(written.contains(&config.output_path(files::ECDSA_CSV)));
        assert!(config.output_path(files::ECDSA_CSV).exists());
        if cfg!(feature = "plot") {
            assert!(written.contains(&config.output_path(files::RSA_PLOT)));
            assert!(config.output_path(files::ECDSA_PLOT).exists());
        }
    }

    #[test]
    fn test_write_all_missing_dir_is_logged() {
        let temp_dir = TempDir::new().unwrap();
        let config = BenchConfig {
            output_dir: temp_dir.path().join("does-not-exist"),
            ..Default::default()
        };

        let written = write_all(&SuiteResults::default(), &config);
        assert!(!written.contains(&config.output_path(files::RSA_CSV)));
    }
}
