//! Plaintext generation for the benchmark sweep

use rand::distr::{Alphanumeric, SampleString};

/// Generate a random `[a-zA-Z0-9]` string of exactly `size` bytes
pub fn generate_random_data(size: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), size)
}

/// Generate one sample per requested size, in order
pub fn generate_samples(sizes: &[usize]) -> Vec<String> {
    sizes.iter().map(|&size| generate_random_data(size)).collect()
}
