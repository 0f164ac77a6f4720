//! Cryptographic benchmarks

use cipher_bench::bench::rsa::{encrypt_chunks, max_chunk_len, split_into_chunks};
use cipher_bench::bench::EcdsaBenchmark;
use cipher_bench::data::generate_random_data;
use cipher_bench::image_cipher::aes_cfb::{key_utils, AesCfb};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand_core::OsRng;
use rsa::RsaPrivateKey;
use std::hint::black_box;

const INPUT_SIZES: [usize; 5] = [256, 512, 1024, 2048, 4096];

fn benchmark_rsa_oaep_encrypt(c: &mut Criterion) {
    let private_key = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
    let public_key = private_key.to_public_key();
    let max_len = max_chunk_len(2048).unwrap();

    let mut group = c.benchmark_group("rsa_oaep_encrypt");
    for size in INPUT_SIZES {
        let data = generate_random_data(size);
        let chunks = split_into_chunks(data.as_bytes(), max_len);
        group.bench_with_input(BenchmarkId::from_parameter(size), &chunks, |b, chunks| {
            b.iter(|| black_box(encrypt_chunks(&public_key, chunks).unwrap()))
        });
    }
    group.finish();
}

fn benchmark_ecdsa_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_p256_run");
    for size in INPUT_SIZES {
        let data = generate_random_data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(EcdsaBenchmark::new().run(data).unwrap()))
        });
    }
    group.finish();
}

fn benchmark_aes_cfb(c: &mut Criterion) {
    let data = vec![0u8; 1024 * 1024];
    let key = key_utils::generate_key();
    let iv = key_utils::generate_iv();

    c.bench_function("aes256_cfb_1mb", |b| {
        b.iter(|| black_box(AesCfb::encrypt(&data, &key, &iv).unwrap()))
    });
}

criterion_group!(benches, benchmark_rsa_oaep_encrypt, benchmark_ecdsa_run, benchmark_aes_cfb);
criterion_main!(benches);
