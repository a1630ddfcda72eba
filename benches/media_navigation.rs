// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for playlist operations.
//!
//! Measures the performance of:
//! - Populating a playlist from a directory of mixed files
//! - Shuffling a large item list
//! - Stepping through a playlist with wrap-around

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smp::application::{playlist, Playlist};
use smp::domain::{NavigationDirection, PlaybackOptions, Selection};
use std::hint::black_box;
use std::path::PathBuf;
use tempfile::TempDir;

const FILE_COUNT: usize = 500;

/// A directory with `FILE_COUNT` media files and as many unsupported ones.
fn populated_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for index in 0..FILE_COUNT {
        let ext = ["png", "jpg", "gif", "webm"][index % 4];
        std::fs::write(dir.path().join(format!("{index:04}.{ext}")), b"x")
            .expect("failed to write media file");
        std::fs::write(dir.path().join(format!("{index:04}.txt")), b"x")
            .expect("failed to write text file");
    }
    dir
}

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let dir = populated_dir();
    let selection = Selection::Directory(dir.path().to_path_buf());

    for shuffle in [false, true] {
        let options = PlaybackOptions {
            shuffle,
            ..PlaybackOptions::default()
        };
        let name = if shuffle {
            "populate_shuffled"
        } else {
            "populate_ordered"
        };
        group.bench_function(name, |b| {
            b.iter(|| black_box(Playlist::populate(&selection, options).expect("scan failed")));
        });
    }

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let items: Vec<PathBuf> = (0..10_000)
        .map(|index| PathBuf::from(format!("/media/{index}.png")))
        .collect();
    let mut rng = StdRng::seed_from_u64(7);

    group.bench_function("shuffle_10k", |b| {
        b.iter(|| {
            let mut items = items.clone();
            playlist::shuffle(&mut items, &mut rng);
            black_box(items);
        });
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let dir = populated_dir();
    let mut slot = Playlist::populate(
        &Selection::Directory(dir.path().to_path_buf()),
        PlaybackOptions::default(),
    )
    .expect("scan failed");

    group.bench_function("advance_full_cycle", |b| {
        b.iter(|| {
            for _ in 0..FILE_COUNT {
                black_box(playlist::advance(&mut slot, NavigationDirection::Next));
            }
        });
    });

    group.bench_function("retreat_full_cycle", |b| {
        b.iter(|| {
            for _ in 0..FILE_COUNT {
                black_box(playlist::advance(&mut slot, NavigationDirection::Previous));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_populate, bench_shuffle, bench_navigate);
criterion_main!(benches);
