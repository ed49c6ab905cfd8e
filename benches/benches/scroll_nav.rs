// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for visible range queries and extent estimation.

use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use understory_scroll_nav::{
    EdgeInsets, FixedExtentModel, GridTrackModel, LayoutConfig, ScrollMetrics,
    ScrollPositionEstimator, fixed_visible_range, visible_range,
};

fn bench_visible_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_range");
    for len in [1_000_usize, 100_000] {
        let extents: Vec<f64> = (0..len).map(|i| 40.0 + (i % 7) as f64 * 5.0).collect();
        // Roughly the middle of the strip.
        let offset = len as f64 * 30.0;

        group.bench_with_input(BenchmarkId::new("walk", len), &len, |b, &len| {
            b.iter(|| visible_range(black_box(offset), 800.0, len, |i| extents[i]));
        });
        group.bench_with_input(BenchmarkId::new("fixed", len), &len, |b, &len| {
            b.iter(|| fixed_visible_range(black_box(offset), 800.0, len, 55.0));
        });
    }
    group.finish();

    c.bench_function("grid_visible_cells", |b| {
        let columns = NonZeroUsize::new(4).unwrap();
        let mut grid = GridTrackModel::new(FixedExtentModel::new(0, 104.0), columns, 100_000);
        b.iter(|| grid.visible_cells(black_box(1_250_000.0), 800.0));
    });
}

fn bench_estimator(c: &mut Criterion) {
    let full = ScrollPositionEstimator::new(LayoutConfig {
        cross_axis_count: NonZeroUsize::new(4),
        item_count: Some(10_000),
        main_axis_spacing: Some(4.0),
        child_aspect_ratio: Some(1.0),
        padding: Some(EdgeInsets::vertical(16.0, 0.0)),
        ..LayoutConfig::default()
    });
    let partial = ScrollPositionEstimator::new(LayoutConfig {
        cross_axis_count: NonZeroUsize::new(4),
        item_count: Some(10_000),
        ..LayoutConfig::default()
    });
    let metrics = Some(ScrollMetrics::new(120_000.0, 800.0, 259_212.0));

    c.bench_function("row_extent_full_geometry", |b| {
        b.iter(|| full.effective_row_extent(black_box(metrics)));
    });
    c.bench_function("row_extent_calibrated", |b| {
        b.iter(|| partial.effective_row_extent(black_box(metrics)));
    });
}

criterion_group!(benches, bench_visible_range, bench_estimator);
criterion_main!(benches);
