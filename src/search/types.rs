//! Search results and the observer hook.

/// A candidate ordering and its cutwidth.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Node ids `1..=n` in arrangement order.
    pub permutation: Vec<usize>,
    /// Cutwidth of `permutation`.
    pub cutwidth: usize,
}

/// Best result of one sample, with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleOutcome {
    /// 0-based sample index.
    pub sample: usize,

    /// Best ordering found in this sample (first found on ties).
    pub best: SearchResult,

    /// Number of trials evaluated.
    pub trials: usize,

    /// 0-based trial at which `best` was found.
    pub best_trial: usize,

    /// Number of strict improvements of the running best, counting the
    /// first trial.
    pub improvements: usize,

    /// Running best cutwidth after each trial. Non-increasing.
    pub cutwidth_history: Vec<usize>,
}

/// Best result across all samples.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalOutcome {
    /// Best ordering after re-evaluating every sample's best.
    pub best: SearchResult,

    /// Index of the sample that supplied `best`.
    pub best_sample: usize,

    /// Every sample's outcome, in sample order.
    pub samples: Vec<SampleOutcome>,
}

impl GlobalOutcome {
    /// Total trials evaluated across all samples.
    pub fn total_trials(&self) -> usize {
        self.samples.iter().map(|s| s.trials).sum()
    }
}

/// Receives search progress. Observers never influence the search.
///
/// All hooks default to no-ops. With parallel execution, hooks for
/// different samples may be called concurrently, hence the `Sync` bound.
pub trait SearchObserver: Sync {
    /// Called after each trial with the shuffled permutation and its cutwidth.
    fn on_trial(&self, _sample: usize, _trial: usize, _permutation: &[usize], _cutwidth: usize) {}

    /// Called when a sample completes.
    fn on_sample(&self, _outcome: &SampleOutcome) {}

    /// Called once with the reduced global outcome.
    fn on_finish(&self, _outcome: &GlobalOutcome) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that forwards progress to the `log` facade: trials at `trace`,
/// samples at `debug`, the final outcome at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_trial(&self, sample: usize, trial: usize, permutation: &[usize], cutwidth: usize) {
        log::trace!(
            "sample {} trial {}: {:?} cutwidth {}",
            sample + 1,
            trial + 1,
            permutation,
            cutwidth
        );
    }

    fn on_sample(&self, outcome: &SampleOutcome) {
        log::debug!(
            "sample {} best cutwidth {} (trial {}, {} improvements)",
            outcome.sample + 1,
            outcome.best.cutwidth,
            outcome.best_trial + 1,
            outcome.improvements
        );
    }

    fn on_finish(&self, outcome: &GlobalOutcome) {
        log::info!(
            "global best cutwidth {} from sample {} ({} trials)",
            outcome.best.cutwidth,
            outcome.best_sample + 1,
            outcome.total_trials()
        );
    }
}
