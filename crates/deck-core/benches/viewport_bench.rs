//! Criterion benchmarks for surface rectangle computation.
//!
//! `compute_surface_rects` runs on every resize observation; it is pure
//! integer arithmetic and should be effectively free.
//!
//! Run with:
//! ```bash
//! cargo bench --package deck-core --bench viewport_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deck_core::{compute_surface_rects, BoxSize, ChromeConfig};

/// Representative panel sizes for in-vehicle displays.
const BENCH_SIZES: &[(u32, u32)] = &[
    (800, 480),
    (1024, 600),
    (1280, 480),
    (1920, 720),
];

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_compute");

    group.bench_function("visible_chrome_single", |b| {
        b.iter(|| {
            compute_surface_rects(black_box(BoxSize::new(1280, 480)), ChromeConfig::new(50))
        })
    });

    group.bench_function("hidden_chrome_single", |b| {
        b.iter(|| {
            compute_surface_rects(black_box(BoxSize::new(1280, 480)), ChromeConfig::new(0))
        })
    });

    group.bench_function("batch_4_sizes", |b| {
        b.iter(|| {
            BENCH_SIZES
                .iter()
                .map(|&(w, h)| {
                    compute_surface_rects(black_box(BoxSize::new(w, h)), ChromeConfig::new(50))
                })
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
