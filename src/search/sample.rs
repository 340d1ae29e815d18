//! Best-of-N random permutation search within a single sample.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{SampleOutcome, SearchObserver, SearchResult};
use crate::error::{CutwidthError, Result};
use crate::evaluator::CutwidthEvaluator;
use crate::graph::Graph;

/// Runs one sample: shuffles a working permutation `trials` times and keeps
/// the ordering with the smallest cutwidth.
///
/// # Algorithm
///
/// 1. Start from the identity ordering `[1, ..., n]`
/// 2. For each trial:
///    a. Shuffle the working permutation in place (uniform Fisher-Yates)
///    b. Evaluate its cutwidth
///    c. Keep it if strictly better than the best so far
///
/// Ties never replace the current best, so the first ordering to reach the
/// minimum wins.
pub struct SampleSearch;

impl SampleSearch {
    /// Runs a sample with index 0 and no observer.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_cutwidth::{Graph, SampleSearch};
    /// use u_cutwidth::random::create_rng;
    ///
    /// let g = Graph::from_edges(4, &[(1, 2), (2, 3), (3, 4)]).unwrap();
    /// let outcome = SampleSearch::run(&g, 50, &mut create_rng(42)).unwrap();
    /// assert!(outcome.best.cutwidth <= 2);
    /// assert_eq!(outcome.trials, 50);
    /// ```
    pub fn run<R: Rng + ?Sized>(
        graph: &Graph,
        trials: usize,
        rng: &mut R,
    ) -> Result<SampleOutcome> {
        Self::run_with_observer(graph, 0, trials, rng, &super::NoopObserver)
    }

    /// Runs sample number `sample`, reporting every trial to `observer`.
    ///
    /// # Errors
    /// - [`CutwidthError::EmptyGraph`] if the graph has no nodes
    /// - [`CutwidthError::NoCandidate`] if `trials` is 0
    pub fn run_with_observer<R, O>(
        graph: &Graph,
        sample: usize,
        trials: usize,
        rng: &mut R,
        observer: &O,
    ) -> Result<SampleOutcome>
    where
        R: Rng + ?Sized,
        O: SearchObserver + ?Sized,
    {
        if graph.is_empty() {
            return Err(CutwidthError::EmptyGraph);
        }
        if trials == 0 {
            return Err(CutwidthError::no_candidate(format!(
                "sample {} has no trials",
                sample + 1
            )));
        }

        let mut evaluator = CutwidthEvaluator::new();
        let mut working = graph.identity_permutation();
        let mut best: Option<SearchResult> = None;
        let mut best_trial = 0usize;
        let mut improvements = 0usize;
        let mut cutwidth_history = Vec::with_capacity(trials);

        for trial in 0..trials {
            working.shuffle(rng);
            let cutwidth = evaluator.evaluate(graph, &working)?;
            observer.on_trial(sample, trial, &working, cutwidth);

            if best.as_ref().is_none_or(|b| cutwidth < b.cutwidth) {
                best = Some(SearchResult {
                    permutation: working.clone(),
                    cutwidth,
                });
                best_trial = trial;
                improvements += 1;
            }

            if let Some(b) = &best {
                cutwidth_history.push(b.cutwidth);
            }
        }

        let best = best.ok_or_else(|| {
            CutwidthError::no_candidate(format!("sample {} produced no candidate", sample + 1))
        })?;

        let outcome = SampleOutcome {
            sample,
            best,
            trials,
            best_trial,
            improvements,
            cutwidth_history,
        };
        observer.on_sample(&outcome);
        Ok(outcome)
    }
}
