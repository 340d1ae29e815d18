//! Randomized cutwidth estimation for undirected graphs.
//!
//! The cutwidth of an ordering is the largest number of edges any node sends
//! to nodes placed after it. This crate estimates the minimum over all
//! orderings by random sampling:
//!
//! - **Graph**: adjacency lists over dense 1-based node ids, with a plain-text
//!   loader and Graphviz DOT export.
//! - **Evaluator**: O(n + m) cutwidth of a single ordering.
//! - **Sample search**: best-of-N uniformly shuffled orderings.
//! - **Multi-sample reduction**: independent samples on separate RNG streams,
//!   reduced to one global best. Samples can run on rayon with the
//!   `parallel` feature.
//!
//! # Example
//!
//! ```
//! use u_cutwidth::{Graph, MultiSampleReducer, SearchConfig};
//!
//! let graph: Graph = "5 4\n1 2\n2 3\n3 4\n4 5\n".parse().unwrap();
//! let config = SearchConfig::default()
//!     .with_trials_per_sample(200)
//!     .with_sample_count(4)
//!     .with_seed(7);
//! let outcome = MultiSampleReducer::run(&graph, &config).unwrap();
//! assert!(outcome.best.cutwidth >= 1);
//! ```

pub mod cli;
pub mod error;
pub mod evaluator;
pub mod graph;
pub mod random;
pub mod report;
pub mod search;

pub use error::{CutwidthError, Result};
pub use evaluator::{cutwidth, CutwidthEvaluator};
pub use graph::Graph;
pub use search::{
    GlobalOutcome, LogObserver, MultiSampleReducer, NoopObserver, SampleOutcome, SampleSearch,
    SearchConfig, SearchObserver, SearchResult,
};
