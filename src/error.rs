//! Error types.

use thiserror::Error;

/// Errors produced by graph construction, evaluation, and search.
#[derive(Error, Debug)]
pub enum CutwidthError {
    /// The graph has no nodes, so no permutation exists to evaluate.
    #[error("configuration error: graph has no nodes, cutwidth is undefined")]
    EmptyGraph,

    /// An edge endpoint lies outside `[1, node_count]`.
    #[error("node {node} out of range [1, {node_count}]")]
    NodeOutOfRange { node: usize, node_count: usize },

    /// A permutation is not a bijection onto `1..=node_count`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    /// The search produced no candidate (zero trials or zero samples).
    #[error("no candidate: {0}")]
    NoCandidate(String),

    /// Malformed graph text.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O errors while reading graphs or writing exports.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CutwidthError {
    /// Creates a no-candidate error.
    pub fn no_candidate(message: impl Into<String>) -> Self {
        CutwidthError::NoCandidate(message.into())
    }

    /// Creates a parse error for a 1-based line number.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        CutwidthError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CutwidthError>;
