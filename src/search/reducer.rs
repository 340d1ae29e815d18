//! Multi-sample search and cross-sample reduction.
//!
//! # Algorithm
//!
//! 1. Seed a master RNG and draw one stream seed per sample
//! 2. Run [`SampleSearch`] for every sample on its own stream
//! 3. Re-evaluate each sample's best ordering and keep the strict minimum
//!    (the earliest sample wins on ties)

use super::config::SearchConfig;
use super::sample::SampleSearch;
use super::types::{GlobalOutcome, NoopObserver, SampleOutcome, SearchObserver, SearchResult};
use crate::error::{CutwidthError, Result};
use crate::evaluator::CutwidthEvaluator;
use crate::graph::Graph;
use crate::random::{create_rng, master_rng, split_seeds};

/// Runs independent samples and reduces them to a global best.
pub struct MultiSampleReducer;

impl MultiSampleReducer {
    /// Runs the full search.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_cutwidth::{Graph, MultiSampleReducer, SearchConfig};
    ///
    /// let g = Graph::from_edges(4, &[(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
    /// let config = SearchConfig::default()
    ///     .with_trials_per_sample(20)
    ///     .with_sample_count(4)
    ///     .with_seed(42);
    /// let outcome = MultiSampleReducer::run(&g, &config).unwrap();
    /// assert_eq!(outcome.samples.len(), 4);
    /// assert_eq!(outcome.best.cutwidth, 2);
    /// ```
    pub fn run(graph: &Graph, config: &SearchConfig) -> Result<GlobalOutcome> {
        Self::run_with_observer(graph, config, &NoopObserver)
    }

    /// Runs the full search, reporting progress to `observer`.
    ///
    /// # Errors
    /// - [`CutwidthError::EmptyGraph`] if the graph has no nodes
    /// - [`CutwidthError::NoCandidate`] if the configuration asks for zero
    ///   trials or zero samples
    ///
    /// Any failing sample aborts the whole run.
    pub fn run_with_observer<O>(
        graph: &Graph,
        config: &SearchConfig,
        observer: &O,
    ) -> Result<GlobalOutcome>
    where
        O: SearchObserver + ?Sized,
    {
        if graph.is_empty() {
            return Err(CutwidthError::EmptyGraph);
        }
        config.validate()?;

        let mut master = master_rng(config.seed);
        let seeds = split_seeds(&mut master, config.sample_count);

        log::debug!(
            "searching {} samples x {} trials on {} nodes",
            config.sample_count,
            config.trials_per_sample,
            graph.node_count()
        );

        let samples = run_samples(graph, config, &seeds, observer)?;
        let (best_sample, best) = Self::reduce(graph, &samples)?;

        let outcome = GlobalOutcome {
            best,
            best_sample,
            samples,
        };
        observer.on_finish(&outcome);
        Ok(outcome)
    }

    /// Re-evaluates every sample's best ordering and returns the index and
    /// result of the minimum.
    ///
    /// The re-evaluated cutwidth is authoritative over the stored score.
    /// The earliest sample wins on ties.
    pub fn reduce(graph: &Graph, samples: &[SampleOutcome]) -> Result<(usize, SearchResult)> {
        let mut evaluator = CutwidthEvaluator::new();
        let mut best: Option<(usize, SearchResult)> = None;

        for (idx, outcome) in samples.iter().enumerate() {
            let cutwidth = evaluator.evaluate(graph, &outcome.best.permutation)?;
            if cutwidth != outcome.best.cutwidth {
                log::warn!(
                    "sample {} recorded cutwidth {} but re-evaluates to {}",
                    outcome.sample + 1,
                    outcome.best.cutwidth,
                    cutwidth
                );
            }

            if best.as_ref().is_none_or(|(_, b)| cutwidth < b.cutwidth) {
                best = Some((
                    idx,
                    SearchResult {
                        permutation: outcome.best.permutation.clone(),
                        cutwidth,
                    },
                ));
            }
        }

        best.ok_or_else(|| CutwidthError::no_candidate("no samples to reduce"))
    }
}

fn run_sample<O>(
    graph: &Graph,
    config: &SearchConfig,
    sample: usize,
    seed: u64,
    observer: &O,
) -> Result<SampleOutcome>
where
    O: SearchObserver + ?Sized,
{
    let mut rng = create_rng(seed);
    SampleSearch::run_with_observer(graph, sample, config.trials_per_sample, &mut rng, observer)
}

fn run_samples<O>(
    graph: &Graph,
    config: &SearchConfig,
    seeds: &[u64],
    observer: &O,
) -> Result<Vec<SampleOutcome>>
where
    O: SearchObserver + ?Sized,
{
    if config.parallel {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            return seeds
                .par_iter()
                .enumerate()
                .map(|(sample, &seed)| run_sample(graph, config, sample, seed, observer))
                .collect();
        }
        #[cfg(not(feature = "parallel"))]
        log::debug!(
            "parallel execution requested without the `parallel` feature; running sequentially"
        );
    }

    seeds
        .iter()
        .enumerate()
        .map(|(sample, &seed)| run_sample(graph, config, sample, seed, observer))
        .collect()
}
