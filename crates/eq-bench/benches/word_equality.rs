//! Word Equality Benchmarks
//!
//! Every u64 strategy over the same byte sizes as the byte benches, plus the
//! 16-word unrolled compare against the general strategies at its one size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eq_bench::{random_bytes, with_flipped_first, BUFFER_SIZES, DEFAULT_SEED};
use eq_core::scalar::{words_unrolled16, UNROLLED_WORDS};
use eq_core::{to_bytes, to_words, Variant, Width};

fn seeded_words(bytes: usize) -> Vec<u64> {
    to_words(&random_bytes(bytes, DEFAULT_SEED)).expect("buffer sizes are whole words")
}

/// Full scan: both buffers equal
fn bench_words_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("words_equal");

    for &size in BUFFER_SIZES {
        group.throughput(Throughput::Bytes(size as u64));

        let a = seeded_words(size);
        let b = a.clone();

        for variant in Variant::for_width(Width::Words) {
            // Fixed-size strategy, benched separately
            if variant == Variant::Unrolled16 {
                continue;
            }
            let Some(f) = variant.word_fn() else { continue };
            group.bench_with_input(BenchmarkId::new(variant.name(), size), &size, |bench, _| {
                bench.iter(|| f(black_box(a.as_slice()), black_box(b.as_slice())))
            });
        }
    }

    group.finish();
}

/// Early exit: first word differs
fn bench_words_early_mismatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("words_early_mismatch");

    for &size in BUFFER_SIZES {
        let a = seeded_words(size);
        let b = with_flipped_first(&a);

        for variant in Variant::for_width(Width::Words) {
            if variant == Variant::Unrolled16 {
                continue;
            }
            let Some(f) = variant.word_fn() else { continue };
            group.bench_with_input(BenchmarkId::new(variant.name(), size), &size, |bench, _| {
                bench.iter(|| f(black_box(a.as_slice()), black_box(b.as_slice())))
            });
        }
    }

    group.finish();
}

/// 16 words: unrolled compare vs every other word strategy
fn bench_words_unrolled16(c: &mut Criterion) {
    let mut group = c.benchmark_group("words_16");
    group.throughput(Throughput::Bytes((UNROLLED_WORDS * 8) as u64));

    let a = seeded_words(UNROLLED_WORDS * 8);
    let b = a.clone();

    group.bench_function("unrolled16_checked", |bench| {
        bench.iter(|| words_unrolled16(black_box(a.as_slice()), black_box(b.as_slice())))
    });

    for variant in Variant::for_width(Width::Words) {
        let Some(f) = variant.word_fn() else { continue };
        group.bench_function(variant.name(), |bench| {
            bench.iter(|| f(black_box(a.as_slice()), black_box(b.as_slice())))
        });
    }

    group.finish();
}

/// Buffer format conversion cost
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for &size in BUFFER_SIZES {
        group.throughput(Throughput::Bytes(size as u64));

        let bytes = random_bytes(size, DEFAULT_SEED);
        let words = seeded_words(size);

        group.bench_with_input(BenchmarkId::new("to_words", size), &size, |bench, _| {
            bench.iter(|| to_words(black_box(bytes.as_slice())))
        });
        group.bench_with_input(BenchmarkId::new("to_bytes", size), &size, |bench, _| {
            bench.iter(|| to_bytes(black_box(words.as_slice())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_words_equal,
    bench_words_early_mismatch,
    bench_words_unrolled16,
    bench_conversion,
);

criterion_main!(benches);
