//! Benchmark tests for the tree renderer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use repo_tree::render::{render_document, render_tree, RenderOptions};

/// Sorted synthetic paths spread over `dir_count` nested directories
fn synthetic_paths(file_count: usize, dir_count: usize) -> Vec<String> {
    let mut paths: Vec<String> = (0..file_count)
        .map(|i| {
            let d = i % dir_count.max(1);
            if i % 7 == 0 {
                format!(".hidden{}/file{}.txt", d, i)
            } else {
                format!("dir{}/sub{}/file{}.txt", d, d % 3, i)
            }
        })
        .collect();
    paths.sort();
    paths
}

fn benchmark_render_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_tree");

    for &(files, dirs) in &[(100, 10), (1_000, 50), (10_000, 200)] {
        let paths = synthetic_paths(files, dirs);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}f_{}d", files, dirs)),
            &paths,
            |b, paths| b.iter(|| render_tree(black_box(paths.as_slice()))),
        );
    }

    group.finish();
}

fn benchmark_render_document(c: &mut Criterion) {
    let paths = synthetic_paths(5_000, 100);
    let options = RenderOptions::default();

    c.bench_function("render_document_5000", |b| {
        b.iter(|| render_document(black_box(&paths), &options).to_string())
    });
}

criterion_group!(benches, benchmark_render_tree, benchmark_render_document);
criterion_main!(benches);
