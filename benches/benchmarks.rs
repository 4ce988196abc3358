//! Benchmarks for streamstats accumulators
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use streamstats::quantiles::{Percentile, StreamingPercentile};
use streamstats::registry::StatisticSet;
use streamstats::statistics::{Max, Mean, Min, StdDev};
use streamstats::traits::Statistic;

fn values(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 7919) % 10_007) as f64 * 0.5).collect()
}

// ============================================================================
// Single-pass accumulators
// ============================================================================

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    group.throughput(Throughput::Elements(1));

    group.bench_function("min", |b| {
        let mut min = Min::new();
        let mut x = 0.0;
        b.iter(|| {
            min.update(black_box(x));
            x += 1.0;
        });
    });

    group.bench_function("max", |b| {
        let mut max = Max::new();
        let mut x = 0.0;
        b.iter(|| {
            max.update(black_box(x));
            x += 1.0;
        });
    });

    group.bench_function("mean", |b| {
        let mut mean = Mean::new();
        let mut x = 0.0;
        b.iter(|| {
            mean.update(black_box(x));
            x += 1.0;
        });
    });

    group.finish();
}

// ============================================================================
// History-retaining accumulators
// ============================================================================

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");

    for n in [100, 1_000, 5_000] {
        let data = values(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("stddev", n), &data, |b, data| {
            b.iter(|| {
                let mut std = StdDev::new();
                for &v in data {
                    std.update(v);
                }
                black_box(std.evaluate())
            });
        });

        group.bench_with_input(BenchmarkId::new("percentile_resort", n), &data, |b, data| {
            b.iter(|| {
                let mut p95 = Percentile::p95();
                for &v in data {
                    p95.update(v);
                }
                black_box(p95.evaluate())
            });
        });

        group.bench_with_input(BenchmarkId::new("percentile_heaps", n), &data, |b, data| {
            b.iter(|| {
                let mut p95 = StreamingPercentile::new(95).unwrap();
                for &v in data {
                    p95.update(v);
                }
                black_box(p95.evaluate())
            });
        });
    }

    group.finish();
}

// ============================================================================
// Standard set
// ============================================================================

fn bench_standard_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_set");
    let data = values(1_000);
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_function("update_and_report", |b| {
        b.iter(|| {
            let mut set = StatisticSet::standard();
            set.extend(data.iter().copied());
            black_box(set.report())
        });
    });

    group.bench_function("run", |b| {
        let text = data
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        b.iter(|| {
            let mut out = Vec::new();
            streamstats::run(black_box(text.as_bytes()), &mut out).unwrap();
            black_box(out)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_history, bench_standard_set);
criterion_main!(benches);
