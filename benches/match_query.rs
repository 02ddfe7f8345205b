//! Benchmark: top-N match query against a synthetic reference store.
//!
//! The production dataset is tens of thousands of rows; 20k synthetic rows
//! exercise the same linear-scan path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crop_recommender_rust::store::{RawRow, ReferenceStore};
use crop_recommender_rust::{top_matches, FeatureVector, FEATURE_COUNT};

const CROPS: &[&str] = &["rice", "wheat", "maize", "cotton", "banana", "coffee"];

fn synthetic_store(rows: usize, seed: u64) -> ReferenceStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..rows)
        .map(|_| {
            let features: FeatureVector =
                (0..FEATURE_COUNT).map(|_| rng.gen_range(0.0..250.0)).collect();
            RawRow::new(features, CROPS[rng.gen_range(0..CROPS.len())])
        })
        .collect();
    ReferenceStore::from_rows(rows)
}

fn bench_top_matches(c: &mut Criterion) {
    let store = synthetic_store(20_000, 42);
    let input = [90.0, 42.0, 43.0, 25.5, 80.0, 6.5, 200.0];

    c.bench_function("top_matches_20k_top5", |b| {
        b.iter(|| top_matches(black_box(&store), black_box(&input), 5).unwrap())
    });

    c.bench_function("top_matches_20k_top50", |b| {
        b.iter(|| top_matches(black_box(&store), black_box(&input), 50).unwrap())
    });
}

criterion_group!(benches, bench_top_matches);
criterion_main!(benches);
