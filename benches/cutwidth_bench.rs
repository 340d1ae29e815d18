//! Criterion benchmarks for cutwidth evaluation and random search.
//!
//! Uses synthetic graphs (random G(n, m) edge sets) to measure evaluator
//! throughput and end-to-end search overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::Rng;
use u_cutwidth::random::create_rng;
use u_cutwidth::{CutwidthEvaluator, Graph, MultiSampleReducer, SearchConfig};

fn random_graph(n: usize, m: usize, seed: u64) -> Graph {
    let mut rng = create_rng(seed);
    let mut graph = Graph::new(n, m);
    for _ in 0..m {
        let u = rng.random_range(1..=n);
        let v = rng.random_range(1..=n);
        graph.add_edge(u, v).expect("endpoints drawn in range");
    }
    graph
}

// ===========================================================================
// Evaluator
// ===========================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &n in &[50, 500, 5000] {
        let graph = random_graph(n, n * 4, 42);
        let mut perm = graph.identity_permutation();
        perm.shuffle(&mut create_rng(7));
        let mut evaluator = CutwidthEvaluator::new();

        group.bench_with_input(BenchmarkId::from_parameter(n), &(graph, perm), |b, (g, p)| {
            b.iter(|| {
                let width = evaluator.evaluate(black_box(g), black_box(p));
                black_box(width)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Multi-sample search
// ===========================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for &n in &[20, 100, 500] {
        let graph = random_graph(n, n * 3, 42);
        let config = SearchConfig::default()
            .with_trials_per_sample(100)
            .with_sample_count(8)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_t100_s8", n), n),
            &(graph, config),
            |b, (g, cfg)| {
                b.iter(|| {
                    let result = MultiSampleReducer::run(black_box(g), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search);
criterion_main!(benches);
