//! Criterion benchmarks for catalog indexing and name search
//!
//! Run with: cargo bench -p eqmatch-catalog
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use eqmatch_catalog::{DirectoryCatalog, ProfileResolver};
use std::fs;
use tempfile::TempDir;

const CATALOG_SIZES: &[usize] = &[100, 1000, 5000];
const BRANDS: &[&str] = &["Sennheiser", "Beyerdynamic", "AKG", "Sony", "Moondrop", "HiFiMAN"];

fn build_tree(size: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..size {
        let brand = BRANDS[i % BRANDS.len()];
        let model = format!("{brand} Model {i}");
        let model_dir = dir.path().join("bench/over-ear").join(&model);
        fs::create_dir_all(&model_dir).unwrap();
        fs::write(
            model_dir.join(format!("{model} ParametricEQ.txt")),
            "Preamp: -5.0 dB\nFilter 1: ON PK Fc 1000 Hz Gain 1.0 dB Q 1.00\n",
        )
        .unwrap();
    }
    dir
}

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("DirectoryCatalog");
    group.sample_size(20);

    for &size in CATALOG_SIZES {
        let tree = build_tree(size);

        group.bench_with_input(BenchmarkId::new("open", size), &size, |b, _| {
            b.iter(|| black_box(DirectoryCatalog::open([tree.path()])));
        });

        let catalog = DirectoryCatalog::open([tree.path()]);
        group.bench_with_input(BenchmarkId::new("candidates", size), &size, |b, _| {
            b.iter(|| black_box(catalog.candidates(black_box("sennheiser model 4"))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_catalog);
criterion_main!(benches);
