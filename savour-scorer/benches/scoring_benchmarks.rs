//! Criterion benchmarks for catalog scoring.
//!
//! Compares per-request fuzzification of candidate values against the
//! precomputed catalog across catalog sizes.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package savour-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use savour_core::{Candidate, Catalog, Domain, Feature, FuzzyModel, PreferenceProfile, Triangle};
use savour_scorer::{
    FuzzyScorer, PrecomputedCatalog, PrecomputedScorer, Recommender, fuzzify_profile,
    score_catalog,
};

/// Seed for deterministic candidate generation.
const BENCHMARK_SEED: u64 = 42;

/// Catalog sizes to benchmark.
const CATALOG_SIZES: &[usize] = &[20, 200, 2_000];

/// Features of the benchmark model, each split into three categories.
const FEATURES: [&str; 6] = [
    "price",
    "temperature",
    "prep_time",
    "calories",
    "availability",
    "satiety",
];

#[expect(clippy::expect_used, reason = "benchmark setup should fail fast")]
fn build_model() -> FuzzyModel {
    let mut model = FuzzyModel::new();
    for name in FEATURES {
        let feature = Feature::new(name, Domain::default())
            .and_then(|f| f.with_category("low", Triangle::new(0.0, 0.0, 40.0).expect("low")))
            .and_then(|f| {
                f.with_category("medium", Triangle::new(30.0, 50.0, 70.0).expect("medium"))
            })
            .and_then(|f| {
                f.with_category("high", Triangle::new(60.0, 100.0, 100.0).expect("high"))
            })
            .expect("valid feature");
        model.add_feature(feature).expect("unique feature");
    }
    model
}

#[expect(clippy::expect_used, reason = "benchmark setup should fail fast")]
fn build_catalog(size: usize) -> Catalog {
    let mut rng = ChaCha8Rng::seed_from_u64(BENCHMARK_SEED);
    let candidates = (0..size).map(|index| {
        FEATURES.iter().fold(
            Candidate::new(format!("dish-{index}")),
            |candidate, feature| candidate.with_attribute(*feature, rng.gen_range(0.0..=100.0)),
        )
    });
    Catalog::new(candidates).expect("unique candidate names")
}

fn build_profile() -> PreferenceProfile {
    FEATURES
        .iter()
        .fold(PreferenceProfile::new(), |profile, feature| {
            profile.with_preference(*feature, 50.0, 1.0)
        })
}

#[expect(clippy::expect_used, reason = "benchmark setup should fail fast")]
fn bench_scoring(c: &mut Criterion) {
    let model = build_model();
    let profile = build_profile();
    let fuzzified = fuzzify_profile(&model, &profile).expect("known features");
    let mut group = c.benchmark_group("score_catalog");

    for &size in CATALOG_SIZES {
        let catalog = build_catalog(size);
        let cache = PrecomputedCatalog::new(&model, &catalog);
        let throughput_size = u64::try_from(size).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("per_request", size), &size, |b, _| {
            b.iter(|| {
                score_catalog(
                    &FuzzyScorer::new(&model),
                    &fuzzified,
                    profile.total_weight(),
                    &catalog,
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("precomputed", size), &size, |b, _| {
            b.iter(|| {
                score_catalog(
                    &PrecomputedScorer::new(&model, &cache),
                    &fuzzified,
                    profile.total_weight(),
                    &catalog,
                )
            });
        });
    }
    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::new(build_model(), build_catalog(200));
    let profile = build_profile();
    c.bench_function("recommend_200", |b| b.iter(|| recommender.recommend(&profile)));
}

criterion_group!(benches, bench_scoring, bench_recommend);
criterion_main!(benches);
