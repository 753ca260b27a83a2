//! Benchmarks for the spanning tree and coloring algorithms
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

use mst_color::generator::random_connected;
use mst_color::graph::Graph;
use mst_color::kruskal::mst;
use mst_color::search::backtracking::minimum_coloring;
use mst_color::search::dsatur::dsatur_order;
use mst_color::search::greedy::{greedy_coloring, greedy_coloring_by_degree, palette};

fn random_graph(n:usize, density:f64) -> Graph {
    let mut rng = StdRng::seed_from_u64(n as u64);
    random_connected(n, density, &mut rng).unwrap()
}

fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");
    for n in [100usize, 500, 1000] {
        let graph = random_graph(n, 0.4);
        group.throughput(Throughput::Elements(graph.nb_edges() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| mst(black_box(g)))
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for n in [100usize, 500, 1000] {
        let graph = random_graph(n, 0.4);
        let colors = palette(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("natural", n), &graph, |b, g| {
            b.iter(|| greedy_coloring(black_box(g), &colors).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("degree", n), &graph, |b, g| {
            b.iter(|| greedy_coloring_by_degree(black_box(g), &colors).unwrap())
        });
    }
    group.finish();
}

fn bench_dsatur_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsatur_order");
    for n in [100usize, 500, 1000] {
        let graph = random_graph(n, 0.4);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| dsatur_order(black_box(g)))
        });
    }
    group.finish();
}

fn bench_minimum_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_coloring");
    group.sample_size(10);
    for n in [10usize, 20, 30] {
        let graph = random_graph(n, 0.3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| minimum_coloring(black_box(g), None).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_kruskal,
    bench_greedy,
    bench_dsatur_order,
    bench_minimum_coloring,
);
criterion_main!(benches);
