//! Two-level random search for low-cutwidth orderings.
//!
//! [`SampleSearch`] evaluates a batch of uniformly random permutations and
//! keeps the best one. [`MultiSampleReducer`] repeats that across independent
//! samples, each on its own RNG stream, and re-scores the sample bests to
//! pick a global winner.
//!
//! There is no convergence guarantee: this is best-of-N sampling, not an
//! exact width algorithm.

mod config;
mod reducer;
mod sample;
mod types;

pub use config::SearchConfig;
pub use reducer::MultiSampleReducer;
pub use sample::SampleSearch;
pub use types::{
    GlobalOutcome, LogObserver, NoopObserver, SampleOutcome, SearchObserver, SearchResult,
};
