//! Experiment configuration.

use crate::error::{Error, Result};
use crate::graph::MIN_POINTS;
use crate::solve::{Algorithm, SolveOptions};

/// Configuration for a batch of random-instance trials.
///
/// # Examples
///
/// ```
/// use u_tsp::experiments::ExperimentConfig;
/// use u_tsp::solve::Algorithm;
///
/// let config = ExperimentConfig::default()
///     .with_n(15)
///     .with_trials(20)
///     .with_algorithms(vec![Algorithm::Ppp, Algorithm::OptPpp]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Points per instance.
    pub n: usize,

    /// Number of random instances.
    pub trials: usize,

    /// Seed of the first instance; trial `i` uses `seed + i`.
    pub seed: u64,

    /// First point of the greedy cycle and spanning tree root.
    pub start: usize,

    /// Solvers to run on every instance.
    pub algorithms: Vec<Algorithm>,

    /// Exponential solvers are skipped above this many points.
    pub hds_max_n: usize,

    /// Node budget of the branch & bound search.
    pub hds_max_nodes: usize,

    /// Run trials in parallel with rayon (requires the `parallel`
    /// feature; ignored otherwise).
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            n: 10,
            trials: 100,
            seed: 42,
            start: 0,
            algorithms: Algorithm::ALL.to_vec(),
            hds_max_n: 12,
            hds_max_nodes: 100_000,
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_hds_max_n(mut self, n: usize) -> Self {
        self.hds_max_n = n;
        self
    }

    pub fn with_hds_max_nodes(mut self, n: usize) -> Self {
        self.hds_max_nodes = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Solver options derived from this configuration.
    pub fn solve_options(&self) -> SolveOptions {
        let mut options = SolveOptions::default().with_start(self.start);
        options.hds.max_nodes = self.hds_max_nodes;
        options
    }

    /// Whether `algorithm` runs at this instance size.
    pub fn runs(&self, algorithm: Algorithm) -> bool {
        !algorithm.is_exponential() || self.n <= self.hds_max_n
    }

    pub fn validate(&self) -> Result<()> {
        if self.n < MIN_POINTS {
            return Err(Error::invalid_input(format!(
                "instances need at least {MIN_POINTS} points, got {}",
                self.n
            )));
        }
        if self.trials == 0 {
            return Err(Error::invalid_input("trials must be at least 1"));
        }
        if self.algorithms.is_empty() {
            return Err(Error::invalid_input("no algorithm selected"));
        }
        if self.start >= self.n {
            return Err(Error::invalid_input(format!(
                "start index {} out of range for {} points",
                self.start, self.n
            )));
        }
        Ok(())
    }
}
