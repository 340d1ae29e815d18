//! Cutwidth evaluation of a node ordering.
//!
//! For an ordering `π`, every node `u` contributes the number of its
//! neighbors placed after it, `|{v ∈ N(u) : pos(u) < pos(v)}|`. The cutwidth
//! of `π` is the maximum contribution. Each edge is attributed to its earlier
//! endpoint only, so nothing is double counted.
//!
//! # Complexity
//! O(n + m) per evaluation, m counting both adjacency entries of each edge.

use crate::error::{CutwidthError, Result};
use crate::graph::Graph;

const UNPLACED: usize = usize::MAX;

/// Evaluates orderings against a graph, reusing its position buffer across
/// calls.
///
/// The position index is rebuilt from scratch on every call; only the
/// allocation is reused.
#[derive(Debug, Clone, Default)]
pub struct CutwidthEvaluator {
    position: Vec<usize>,
}

impl CutwidthEvaluator {
    /// Evaluator with an empty position buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the cutwidth of `permutation` on `graph`.
    ///
    /// # Errors
    /// - [`CutwidthError::EmptyGraph`] if the graph has no nodes
    /// - [`CutwidthError::InvalidPermutation`] if `permutation` is not a
    ///   bijection onto `1..=node_count`
    ///
    /// # Examples
    ///
    /// ```
    /// use u_cutwidth::{CutwidthEvaluator, Graph};
    ///
    /// let g = Graph::from_edges(4, &[(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
    /// let mut eval = CutwidthEvaluator::new();
    /// // Node 1 comes first, so both of its edges lead later.
    /// assert_eq!(eval.evaluate(&g, &[1, 2, 3, 4]).unwrap(), 2);
    ///
    /// let path = Graph::from_edges(4, &[(1, 2), (2, 3), (3, 4)]).unwrap();
    /// assert_eq!(eval.evaluate(&path, &[1, 2, 3, 4]).unwrap(), 1);
    /// assert_eq!(eval.evaluate(&path, &[1, 3, 2, 4]).unwrap(), 2);
    /// ```
    pub fn evaluate(&mut self, graph: &Graph, permutation: &[usize]) -> Result<usize> {
        self.index_positions(graph, permutation)?;

        let position = &self.position;
        let width = graph
            .adjacency()
            .map(|(u, nbrs)| {
                let pu = position[u - 1];
                nbrs.iter().filter(|&&v| pu < position[v - 1]).count()
            })
            .max()
            .unwrap_or(0);

        Ok(width)
    }

    /// Rebuilds `position[id - 1] = rank` and validates the bijection.
    fn index_positions(&mut self, graph: &Graph, permutation: &[usize]) -> Result<()> {
        let n = graph.node_count();
        if n == 0 {
            return Err(CutwidthError::EmptyGraph);
        }
        if permutation.len() != n {
            return Err(CutwidthError::InvalidPermutation(format!(
                "expected {n} nodes, got {}",
                permutation.len()
            )));
        }

        self.position.clear();
        self.position.resize(n, UNPLACED);

        for (rank, &node) in permutation.iter().enumerate() {
            if node == 0 || node > n {
                return Err(CutwidthError::InvalidPermutation(format!(
                    "node {node} at rank {rank} out of range [1, {n}]"
                )));
            }
            let slot = &mut self.position[node - 1];
            if *slot != UNPLACED {
                return Err(CutwidthError::InvalidPermutation(format!(
                    "node {node} appears at ranks {} and {rank}",
                    *slot
                )));
            }
            *slot = rank;
        }
        Ok(())
    }
}

/// One-shot convenience wrapper around [`CutwidthEvaluator::evaluate`].
pub fn cutwidth(graph: &Graph, permutation: &[usize]) -> Result<usize> {
    CutwidthEvaluator::new().evaluate(graph, permutation)
}
