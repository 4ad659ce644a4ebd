// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation operations.
//!
//! Measures the scan-based navigation primitives over a large, sparse
//! in-memory listing (previewable entries interleaved with gaps).

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::gallery::{Entry, GalleryNavigator};
use iced_gallery::media::MediaKind;
use std::hint::black_box;
use std::path::Path;
use std::time::SystemTime;

/// Builds a listing of `len` entries where every `stride`-th one is
/// previewable and the rest are gaps.
fn sparse_entries(len: usize, stride: usize) -> Vec<Entry> {
    (0..len)
        .map(|i| {
            let previewable = i % stride == 0;
            let name = if previewable {
                format!("{i:05}.png")
            } else {
                format!("{i:05}.dat")
            };
            Entry {
                path: Path::new("/gallery").join(&name),
                name,
                kind: previewable.then_some(MediaKind::Image),
                size: 4096,
                modified: SystemTime::UNIX_EPOCH,
                is_dir: false,
            }
        })
        .collect()
}

fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let navigator = GalleryNavigator::with_entries(sparse_entries(10_000, 25));

    group.bench_function("first_previewable_at_or_after", |b| {
        b.iter(|| black_box(navigator.first_previewable_at_or_after(black_box(1))));
    });

    group.bench_function("first_previewable_at_or_before", |b| {
        b.iter(|| black_box(navigator.first_previewable_at_or_before(black_box(9_999))));
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut navigator = GalleryNavigator::with_entries(sparse_entries(10_000, 25));
    navigator.open(0);

    group.bench_function("next_with_wraparound", |b| {
        b.iter(|| black_box(navigator.next()));
    });

    group.bench_function("previous_with_wraparound", |b| {
        b.iter(|| black_box(navigator.previous()));
    });

    group.bench_function("neighbors", |b| {
        b.iter(|| black_box(navigator.neighbors()));
    });

    group.finish();
}

criterion_group!(benches, bench_scans, bench_navigate);
criterion_main!(benches);
