// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery classification and navigation operations.
//!
//! Measures the performance of:
//! - Elementwise media classification (building the descriptor list)
//! - Lightbox wraparound stepping
//! - The wrap function on extreme indices

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::manifest::MediaEntry;
use iced_gallery::media::classify_entries;
use iced_gallery::selection::{wrap_index, SelectionState};
use std::hint::black_box;

/// Builds a mixed entry list alternating video tokens and image paths.
fn sample_entries(count: usize) -> Vec<MediaEntry> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                MediaEntry::Bare(format!("video_token{i:04}"))
            } else {
                MediaEntry::Bare(format!("shots/photo-{i}.jpg"))
            }
        })
        .collect()
}

/// Benchmark descriptor-list construction from raw entries.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let entries = sample_entries(1_000);

    group.bench_function("classify_1000_entries", |b| {
        b.iter(|| {
            let descriptors = classify_entries(black_box(&entries));
            black_box(descriptors);
        });
    });

    group.finish();
}

/// Benchmark a full wraparound cycle through the lightbox.
fn bench_advance_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let len = 1_000;

    group.bench_function("advance_full_cycle", |b| {
        b.iter(|| {
            let mut selection = SelectionState::new(len);
            selection.open_lightbox(0);
            for _ in 0..len {
                selection.advance_lightbox(1);
            }
            black_box(selection.lightbox_index());
        });
    });

    group.finish();
}

/// Benchmark the wrap function on large-magnitude signed indices.
fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("wrap_extreme_indices", |b| {
        b.iter(|| {
            for i in [-1_000_003_i64, -17, 0, 41, 1_000_003] {
                black_box(wrap_index(black_box(i), 97));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_advance_cycle, bench_wrap);
criterion_main!(benches);
