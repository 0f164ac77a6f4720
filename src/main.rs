//! Runs the RSA/ECDSA sweep, writes the reports, then the AES image demo.

use cipher_bench::bench::BenchmarkSuite;
use cipher_bench::config::BenchConfig;
use cipher_bench::{image_cipher, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BenchConfig::default();
    config.validate()?;
    info!(
        key_size = config.key_size,
        sizes = ?config.input_sizes,
        version = cipher_bench::VERSION,
        "Starting cipher benchmark"
    );

    let results = BenchmarkSuite::new(&config).run();
    let written = report::write_all(&results, &config);
    info!(files = written.len(), "Reports finished");

    image_cipher::run_demo(&config);

    Ok(())
}
