//! Property tests for the evaluator and the search.

use proptest::prelude::*;
use u_cutwidth::{cutwidth, Graph, MultiSampleReducer, SampleSearch, SearchConfig};
use u_cutwidth::random::create_rng;

/// A node count, an edge list over `1..=n`, and a permutation of `1..=n`.
fn graph_and_permutation() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<usize>)> {
    (1usize..16).prop_flat_map(|n| {
        let edges = prop::collection::vec((1..=n, 1..=n), 0..40);
        let perm = Just((1..=n).collect::<Vec<_>>()).prop_shuffle();
        (Just(n), edges, perm)
    })
}

fn build(n: usize, edges: &[(usize, usize)]) -> Graph {
    Graph::from_edges(n, edges).expect("edges drawn in range")
}

proptest! {
    #[test]
    fn prop_cutwidth_within_degree_bound((n, edges, perm) in graph_and_permutation()) {
        let g = build(n, &edges);
        let w = cutwidth(&g, &perm).unwrap();
        prop_assert!(w <= g.max_degree(), "cutwidth {} > max degree {}", w, g.max_degree());
    }

    #[test]
    fn prop_no_edges_is_zero((n, _edges, perm) in graph_and_permutation()) {
        let g = Graph::new(n, 0);
        prop_assert_eq!(cutwidth(&g, &perm).unwrap(), 0);
    }

    #[test]
    fn prop_invariant_to_edge_order(
        (n, edges, perm) in graph_and_permutation(),
        seed in any::<u64>(),
    ) {
        use rand::seq::SliceRandom;

        let g = build(n, &edges);

        // Reverse endpoints and shuffle insertion order.
        let mut reordered: Vec<_> = edges.iter().map(|&(u, v)| (v, u)).collect();
        reordered.shuffle(&mut create_rng(seed));
        let h = build(n, &reordered);

        prop_assert_eq!(cutwidth(&g, &perm).unwrap(), cutwidth(&h, &perm).unwrap());
    }

    #[test]
    fn prop_first_node_contributes_full_degree((n, edges, perm) in graph_and_permutation()) {
        let g = build(n, &edges);
        let first = perm[0];
        let loops = g.neighbors(first).iter().filter(|&&v| v == first).count();
        let w = cutwidth(&g, &perm).unwrap();
        prop_assert!(w >= g.degree(first) - loops);
    }

    #[test]
    fn prop_sample_best_is_history_minimum(
        (n, edges, _perm) in graph_and_permutation(),
        trials in 1usize..30,
        seed in any::<u64>(),
    ) {
        let g = build(n, &edges);
        let outcome = SampleSearch::run(&g, trials, &mut create_rng(seed)).unwrap();

        prop_assert_eq!(outcome.cutwidth_history.len(), trials);
        prop_assert!(outcome.cutwidth_history.windows(2).all(|w| w[1] <= w[0]));
        prop_assert_eq!(outcome.cutwidth_history[0], *outcome.cutwidth_history.iter().max().unwrap());
        prop_assert_eq!(outcome.best.cutwidth, *outcome.cutwidth_history.last().unwrap());
        prop_assert_eq!(cutwidth(&g, &outcome.best.permutation).unwrap(), outcome.best.cutwidth);
    }

    #[test]
    fn prop_global_equals_min_sample(
        (n, edges, _perm) in graph_and_permutation(),
        samples in 1usize..6,
        seed in any::<u64>(),
    ) {
        let g = build(n, &edges);
        let config = SearchConfig::default()
            .with_trials_per_sample(5)
            .with_sample_count(samples)
            .with_seed(seed);
        let outcome = MultiSampleReducer::run(&g, &config).unwrap();

        let min = outcome.samples.iter().map(|s| s.best.cutwidth).min().unwrap();
        prop_assert_eq!(outcome.best.cutwidth, min);
        prop_assert_eq!(outcome.samples.len(), samples);
    }
}
