//! Sweep both runners over every input size

use crate::bench::{EcdsaBenchmark, EcdsaSample, RsaBenchmark, RsaSample, TimingSample};
use crate::config::BenchConfig;
use crate::data::generate_samples;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Collected samples keyed by input size
#[derive(Debug, Clone, Default)]
pub struct SuiteResults {
    /// RSA-OAEP samples
    pub rsa: BTreeMap<usize, RsaSample>,
    /// ECDSA samples
    pub ecdsa: BTreeMap<usize, EcdsaSample>,
}

impl SuiteResults {
    /// Whether no bucket produced a sample
    pub fn is_empty(&self) -> bool {
        self.rsa.is_empty() && self.ecdsa.is_empty()
    }

    /// Flattened RSA timings in size order
    pub fn rsa_timings(&self) -> Vec<TimingSample> {
        self.rsa.values().flat_map(RsaSample::timings).collect()
    }

    /// Flattened ECDSA timings in size order
    pub fn ecdsa_timings(&self) -> Vec<TimingSample> {
        self.ecdsa.values().flat_map(EcdsaSample::timings).collect()
    }
}

/// Runs the RSA and ECDSA benchmarks over the configured sizes
#[derive(Debug, Clone)]
pub struct BenchmarkSuite {
    rsa: RsaBenchmark,
    ecdsa: EcdsaBenchmark,
    input_sizes: Vec<usize>,
}

impl BenchmarkSuite {
    /// Create a suite from the configuration
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            rsa: RsaBenchmark::new(config.key_size),
            ecdsa: EcdsaBenchmark::new(),
            input_sizes: config.input_sizes.clone(),
        }
    }

    /// Generate one random plaintext per size and benchmark it
    pub fn run(&self) -> SuiteResults {
        let samples = generate_samples(&self.input_sizes);
        self.run_samples(&samples)
    }

    /// Benchmark the given plaintexts
    ///
    /// A failing bucket is logged and left out of the results; the
    /// remaining buckets still run.
    pub fn run_samples(&self, samples: &[String]) -> SuiteResults {
        let mut results = SuiteResults::default();

        for data in samples {
            let size = data.len();
            info!(input_size = size, key_size = self.rsa.key_size(), "Benchmarking input");

            match self.rsa.try_run(data) {
                Some(sample) => {
                    results.rsa.insert(size, sample);
                }
                None => warn!(input_size = size, "Skipping RSA bucket"),
            }

            match self.ecdsa.try_run(data) {
                Some(sample) => {
                    results.ecdsa.insert(size, sample);
                }
                None => warn!(input_size = size, "Skipping ECDSA bucket"),
            }
        }

        info!(
            rsa_buckets = results.rsa.len(),
            ecdsa_buckets = results.ecdsa.len(),
            "Benchmark sweep finished"
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_random_data;

    // One key size serves every bucket, so RSA buckets succeed or fail together.
    #[test]
    fn test_failing_rsa_buckets_do_not_stop_ecdsa() {
        let config = BenchConfig {
            key_size: 512,
            input_sizes: vec![256, 512],
            ..Default::default()
        };
        let results = BenchmarkSuite::new(&config).run();

        assert!(results.rsa.is_empty());
        assert_eq!(results.ecdsa.keys().copied().collect::<Vec<_>>(), vec![256, 512]);
        assert_eq!(results.ecdsa_timings().len(), 6);
        assert!(!results.is_empty());
    }

    #[test]
    fn test_run_samples_isolates_each_algorithm() {
        let suite = BenchmarkSuite::new(&BenchConfig {
            key_size: 512,
            ..Default::default()
        });
        let samples = vec![String::new(), generate_random_data(100)];
        let results = suite.run_samples(&samples);

        assert!(results.rsa.is_empty());
        assert_eq!(results.ecdsa.keys().copied().collect::<Vec<_>>(), vec![0, 100]);
        assert!(results.ecdsa.values().all(|s| s.verification_result));
    }

    #[test]
    fn test_run_samples_keeps_every_rsa_bucket() {
        let suite = BenchmarkSuite::new(&BenchConfig {
            key_size: 1024,
            ..Default::default()
        });
        let samples = vec![generate_random_data(10), generate_random_data(200)];
        let results = suite.run_samples(&samples);

        assert_eq!(results.rsa.keys().copied().collect::<Vec<_>>(), vec![10, 200]);
        assert_eq!(results.rsa[&10].chunk_count, 1);
        assert_eq!(results.rsa[&200].chunk_count, 4);
        assert_eq!(results.rsa_timings().len(), 6);
    }

    #[test]
    fn test_empty_results() {
        let results = SuiteResults::default();
        assert!(results.is_empty());
        assert!(results.rsa_timings().is_empty());
    }
}
