//! Undirected graph over dense 1-based node ids.
//!
//! The graph is built once by repeated [`Graph::add_edge`] calls and is
//! read-only during search. Adjacency is symmetric: inserting `(u, v)` pushes
//! `v` onto `u`'s list and `u` onto `v`'s list. Duplicate edges are kept as
//! duplicate entries.

pub mod dot;
pub mod loader;

use std::collections::TryReserveError;
use std::fmt;

use crate::error::{CutwidthError, Result};

/// Adjacency-list graph with node ids in `1..=node_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    node_count: usize,
    declared_edge_count: usize,
    /// `adjacency[id - 1]` holds the neighbors of node `id`.
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes.
    ///
    /// `declared_edge_count` is advisory metadata and is never checked
    /// against the edges actually inserted.
    pub fn new(node_count: usize, declared_edge_count: usize) -> Self {
        Self {
            node_count,
            declared_edge_count,
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Like [`Graph::new`], but returns an error instead of aborting when
    /// the adjacency table for `node_count` nodes cannot be allocated.
    pub fn try_new(
        node_count: usize,
        declared_edge_count: usize,
    ) -> std::result::Result<Self, TryReserveError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(node_count)?;
        adjacency.resize_with(node_count, Vec::new);
        Ok(Self {
            node_count,
            declared_edge_count,
            adjacency,
        })
    }

    /// Builds a graph from an edge list. The declared edge count is set to
    /// the number of edges given.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_cutwidth::Graph;
    ///
    /// let g = Graph::from_edges(3, &[(1, 2), (2, 3)]).unwrap();
    /// assert_eq!(g.neighbors(2), &[1, 3]);
    /// ```
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(node_count, edges.len());
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Inserts the undirected edge `(u, v)`.
    ///
    /// Fails with [`CutwidthError::NodeOutOfRange`] if either endpoint is
    /// outside `[1, node_count]`; the graph is left unchanged in that case.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.adjacency[u - 1].push(v);
        self.adjacency[v - 1].push(u);
        Ok(())
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if node == 0 || node > self.node_count {
            return Err(CutwidthError::NodeOutOfRange {
                node,
                node_count: self.node_count,
            });
        }
        Ok(())
    }

    /// Neighbors of `node`, in insertion order.
    ///
    /// # Panics
    /// Panics if `node` is outside `[1, node_count]`.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        assert!(
            node >= 1 && node <= self.node_count,
            "node {node} out of range [1, {}]",
            self.node_count
        );
        &self.adjacency[node - 1]
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Edge count declared at construction time (advisory).
    pub fn declared_edge_count(&self) -> usize {
        self.declared_edge_count
    }

    /// Number of edges actually inserted.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Number of adjacency entries of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Largest degree over all nodes, 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Iterates over node ids `1..=node_count`.
    pub fn nodes(&self) -> impl Iterator<Item = usize> {
        1..=self.node_count
    }

    /// Iterates over `(node, neighbors)` pairs in id order.
    pub fn adjacency(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(i, nbrs)| (i + 1, nbrs.as_slice()))
    }

    /// Iterates over edges as `(u, v)` with `u < v`.
    ///
    /// Each adjacency pair is yielded once, so duplicate edges are yielded
    /// once per insertion. Self-loops are skipped.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency().flat_map(|(u, nbrs)| {
            nbrs.iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// The ordering `[1, 2, ..., node_count]`.
    pub fn identity_permutation(&self) -> Vec<usize> {
        self.nodes().collect()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph:")?;
        for (node, nbrs) in self.adjacency() {
            write!(f, "Node {node}:")?;
            for v in nbrs {
                write!(f, " {v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
