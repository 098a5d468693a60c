//! Criterion benchmarks for the pickup-and-delivery decoder.
//!
//! The decoder runs once per chromosome per generation, so its cost sets the
//! floor for how many generations a fixed time budget can afford.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dtsppl_brkga::decoder::{chromosome_length, Decoder, PdpDecoder};
use dtsppl_brkga::instance::Instance;
use dtsppl_brkga::random::RandomStream;
use std::sync::Arc;

fn euclidean_instance(n: usize, l: usize) -> Instance {
    let mut rng = RandomStream::new(7);
    let points: Vec<(f64, f64)> = (0..=n).map(|_| (rng.next_f64() * 1000.0, rng.next_f64() * 1000.0)).collect();

    let matrix = |offset: f64| -> Vec<Vec<i64>> {
        (0..=n)
            .map(|i| {
                (0..=n)
                    .map(|j| {
                        if i == j {
                            0
                        } else {
                            let (xi, yi) = points[i];
                            let (xj, yj) = points[j];
                            (((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt() + offset).round() as i64
                        }
                    })
                    .collect()
            })
            .collect()
    };

    // Distinct offsets keep Dp and Dd from being identical while preserving
    // symmetry and a zero diagonal.
    let dp = matrix(0.0);
    let dd = matrix(3.0);

    Instance::new(n, l, 50, dp, dd).unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdp_decode");
    group.sample_size(30);

    for &(n, l) in &[(20usize, 3usize), (100, 5), (300, 8)] {
        let instance = Arc::new(euclidean_instance(n, l));
        let decoder = PdpDecoder::new(instance.clone());
        let mut rng = RandomStream::new(123);
        let g = chromosome_length(n, l);
        let chromosome: Vec<f64> = (0..g).map(|_| rng.next_f64()).collect();

        group.bench_with_input(BenchmarkId::new("decode", format!("n{n}_l{l}")), &chromosome, |b, keys| {
            b.iter(|| black_box(decoder.decode(black_box(keys))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
