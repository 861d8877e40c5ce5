//! Benchmark for memoization: Memoized and TryMemoized.
//!
//! Measures cache hit and miss paths and contention on a shared wrapper.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambdakit::lambda::Lambda;
use lambdakit::memoize::{Memoize, Memoized, TryMemoize};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;

fn sum_to(limit: u64) -> u64 {
    let mut sum = 0;
    for index in 0..limit {
        sum += index;
    }
    sum
}

// =============================================================================
// Memoized Benchmarks
// =============================================================================

fn benchmark_memoized_hit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoized_hit");

    let memoized = sum_to.memoized();
    let _ = memoized.apply((1000,));

    group.bench_function("cached_access", |bencher| {
        bencher.iter(|| black_box(memoized.apply(black_box((1000,)))));
    });

    // Baseline
    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| black_box(sum_to(black_box(1000))));
    });

    group.finish();
}

fn benchmark_memoized_miss(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoized_miss");

    for keys in [10_u64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("distinct_keys", keys), &keys, |bencher, &keys| {
            bencher.iter(|| {
                let memoized = Memoized::with_capacity(|value: u64| value * value, keys as usize);
                for key in 0..keys {
                    black_box(memoized.apply((key,)));
                }
                black_box(memoized.len())
            });
        });
    }

    group.finish();
}

fn benchmark_memoized_contention(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoized_contention");

    for thread_count in [2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("threads", thread_count),
            &thread_count,
            |bencher, &thread_count| {
                bencher.iter(|| {
                    let memoized = Arc::new(sum_to.memoized());
                    let handles: Vec<_> = (0..thread_count)
                        .map(|_| {
                            let memoized = Arc::clone(&memoized);
                            thread::spawn(move || {
                                (0..64).map(|key| memoized.apply((key,))).sum::<u64>()
                            })
                        })
                        .collect();
                    for handle in handles {
                        black_box(handle.join().unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// TryMemoized Benchmarks
// =============================================================================

fn benchmark_try_memoized(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("try_memoized");

    let checked = (|value: u64| value.checked_mul(3).ok_or("overflow")).try_memoized();
    let _ = checked.apply((7,));

    group.bench_function("cached_success", |bencher| {
        bencher.iter(|| black_box(checked.apply(black_box((7,)))));
    });

    // Failures are evaluated every time
    group.bench_function("uncached_failure", |bencher| {
        bencher.iter(|| black_box(checked.apply(black_box((u64::MAX,)))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_memoized_hit,
    benchmark_memoized_miss,
    benchmark_memoized_contention,
    benchmark_try_memoized
);

criterion_main!(benches);
