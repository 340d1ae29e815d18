//! Search configuration.

use crate::error::{CutwidthError, Result};

/// Configuration for the multi-sample random search.
///
/// # Examples
///
/// ```
/// use u_cutwidth::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_trials_per_sample(500)
///     .with_sample_count(8)
///     .with_seed(42);
/// assert_eq!(config.trials_per_sample, 500);
/// assert_eq!(config.sample_count, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Random permutations evaluated in each sample.
    pub trials_per_sample: usize,

    /// Number of independent samples.
    pub sample_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Whether to run samples on the rayon pool.
    ///
    /// Only honored with the `parallel` feature. Results are identical to a
    /// sequential run with the same seed.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trials_per_sample: 100,
            sample_count: 10,
            seed: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sets the number of trials per sample.
    pub fn with_trials_per_sample(mut self, n: usize) -> Self {
        self.trials_per_sample = n;
        self
    }

    /// Sets the number of samples.
    pub fn with_sample_count(mut self, n: usize) -> Self {
        self.sample_count = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether samples run in parallel (needs the `parallel` feature).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Total number of permutations a run will evaluate.
    pub fn total_trials(&self) -> usize {
        self.trials_per_sample.saturating_mul(self.sample_count)
    }

    /// Validates the configuration.
    ///
    /// Zero trials or zero samples cannot produce a candidate and are
    /// reported as [`CutwidthError::NoCandidate`].
    pub fn validate(&self) -> Result<()> {
        if self.trials_per_sample == 0 {
            return Err(CutwidthError::no_candidate(
                "trials_per_sample must be positive",
            ));
        }
        if self.sample_count == 0 {
            return Err(CutwidthError::no_candidate("sample_count must be positive"));
        }
        Ok(())
    }
}
