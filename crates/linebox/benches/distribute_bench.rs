//! Benchmarks for space distribution.
//!
//! Covers the three paths a layout pass can take: an exact fit (one clamp
//! pass), proportional shrink/grow with pinning (several passes), and the
//! equal phase for lines of rigid sizers.
//!
//! Run with: cargo bench -p linebox --bench distribute_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linebox::{Sizer, adjust, distribute};
use std::hint::black_box;

/// A line with mixed bounds and stretch so that growing and shrinking both
/// pin a share of the sizers along the way.
fn mixed_line(n: usize) -> Vec<Sizer> {
    (0..n)
        .map(|i| {
            let i = i as f64;
            Sizer::new()
                .with_size_hint(10.0 + (i * 7.0) % 30.0)
                .with_min_size((i * 3.0) % 8.0)
                .with_max_size(20.0 + (i * 11.0) % 60.0)
                .with_stretch((i as u32) % 4)
        })
        .collect()
}

fn bench_distribute(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute");

    for n in [4usize, 32, 256] {
        group.throughput(Throughput::Elements(n as u64));
        let base = mixed_line(n);
        let hint_total: f64 = base.iter().map(|s| s.clamp(s.size_hint)).sum();

        for (label, space) in [
            ("exact", hint_total),
            ("shrink", hint_total * 0.6),
            ("grow", hint_total * 1.5),
        ] {
            let mut line = base.clone();
            group.bench_with_input(BenchmarkId::new(label, n), &space, |b, &space| {
                b.iter(|| black_box(distribute(black_box(&mut line), space)))
            });
        }

        let mut rigid: Vec<Sizer> = base.iter().map(|s| s.with_stretch(0)).collect();
        group.bench_with_input(
            BenchmarkId::new("equal_phase", n),
            &(hint_total * 1.5),
            |b, &space| b.iter(|| black_box(distribute(black_box(&mut rigid), space))),
        );
    }

    group.finish();
}

fn bench_adjust(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjust");

    for n in [4usize, 32, 256] {
        let mut line = mixed_line(n);
        let space: f64 = line.iter().map(|s| s.clamp(s.size_hint)).sum();
        group.bench_with_input(BenchmarkId::new("drag_and_relayout", n), &n, |b, &n| {
            b.iter(|| {
                distribute(&mut line, space);
                adjust(&mut line, n / 2, 5.0);
                adjust(&mut line, n / 2, -5.0);
                black_box(&line);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distribute, bench_adjust);
criterion_main!(benches);
