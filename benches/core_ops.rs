//! Benchmarks for core PH-tree operations against `std::collections::BTreeMap`
//! as a baseline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phtree::{key_from_slice, EuclideanDistance, Key, PhTree};
use std::collections::BTreeMap;

fn generate_points(n: usize, dim: usize) -> Vec<Key> {
    (0..n)
        .map(|i| {
            let components: Vec<u64> = (0..dim).map(|d| ((i * 2654435761) as u64).wrapping_add(d as u64) % 1_000_000).collect();
            key_from_slice(&components)
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000, 10_000, 100_000] {
        let points = generate_points(size, 3);

        group.bench_with_input(BenchmarkId::new("PhTree", size), &points, |b, points| {
            b.iter(|| {
                let mut tree: PhTree<u64> = PhTree::new(3);
                for (i, key) in points.iter().enumerate() {
                    tree.put(key, i as u64).unwrap();
                }
                black_box(tree)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &points, |b, points| {
            b.iter(|| {
                let mut map: BTreeMap<Key, u64> = BTreeMap::new();
                for (i, key) in points.iter().enumerate() {
                    map.insert(key.clone(), i as u64);
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for size in [1_000, 10_000, 100_000] {
        let points = generate_points(size, 3);

        let mut tree: PhTree<u64> = PhTree::new(3);
        for (i, key) in points.iter().enumerate() {
            tree.put(key, i as u64).unwrap();
        }

        let mut map: BTreeMap<Key, u64> = BTreeMap::new();
        for (i, key) in points.iter().enumerate() {
            map.insert(key.clone(), i as u64);
        }

        group.bench_with_input(BenchmarkId::new("PhTree", size), &points, |b, points| {
            b.iter(|| {
                let mut sum = 0u64;
                for key in points.iter() {
                    if let Ok(Some(v)) = tree.get(key) {
                        sum += v;
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &points, |b, points| {
            b.iter(|| {
                let mut sum = 0u64;
                for key in points.iter() {
                    if let Some(v) = map.get(key) {
                        sum += *v;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in [1_000, 10_000, 100_000] {
        let points = generate_points(size, 3);

        group.bench_with_input(BenchmarkId::new("PhTree", size), &points, |b, points| {
            b.iter_batched(
                || {
                    let mut tree: PhTree<u64> = PhTree::new(3);
                    for (i, key) in points.iter().enumerate() {
                        tree.put(key, i as u64).unwrap();
                    }
                    tree
                },
                |mut tree| {
                    for key in points.iter() {
                        black_box(tree.remove(key).unwrap());
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_window_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_query");

    for size in [1_000, 10_000, 100_000] {
        let points = generate_points(size, 3);
        let mut tree: PhTree<u64> = PhTree::new(3);
        for (i, key) in points.iter().enumerate() {
            tree.put(key, i as u64).unwrap();
        }
        let min = key_from_slice(&[0, 0, 0]);
        let max = key_from_slice(&[100_000, 100_000, 100_000]);

        group.bench_function(BenchmarkId::new("PhTree", size), |b| {
            b.iter(|| {
                let count = tree.query(&min, &max).unwrap().count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_nearest_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");

    for size in [1_000, 10_000, 100_000] {
        let points = generate_points(size, 3);
        let mut tree: PhTree<u64> = PhTree::new(3);
        for (i, key) in points.iter().enumerate() {
            tree.put(key, i as u64).unwrap();
        }
        let center = key_from_slice(&[500_000, 500_000, 500_000]);

        group.bench_function(BenchmarkId::new("PhTree/k=10", size), |b| {
            b.iter(|| {
                let got = tree.nearest_neighbor(&center, 10, &EuclideanDistance).unwrap();
                black_box(got)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_get, bench_remove, bench_window_query, bench_nearest_neighbor);
criterion_main!(benches);
