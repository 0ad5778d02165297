//! OptPPP configuration.

/// Which improving move a pass applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveStrategy {
    /// Apply the first improving move in scan order, then restart the
    /// scan from the first pair. Each pass applies at most one move.
    #[default]
    FirstImprovement,

    /// Apply every improving move as soon as the scan finds it and keep
    /// scanning the modified cycle. Fewer passes, different local optima.
    Sweep,

    /// Scan every pair, then apply only the single largest improvement.
    BestImprovement,
}

/// Configuration for 2-opt local search.
///
/// # Examples
///
/// ```
/// use u_tsp::opt_ppp::{MoveStrategy, OptPppConfig};
///
/// let config = OptPppConfig::default()
///     .with_max_iterations(50)
///     .with_strategy(MoveStrategy::BestImprovement);
/// assert_eq!(config.max_iterations, Some(50));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptPppConfig {
    /// Maximum number of passes. `None` runs until no improving move is
    /// left. With [`MoveStrategy::FirstImprovement`] and
    /// [`MoveStrategy::BestImprovement`] a pass applies one move.
    pub max_iterations: Option<usize>,

    /// Move selection rule.
    pub strategy: MoveStrategy,
}

impl OptPppConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    pub fn with_strategy(mut self, strategy: MoveStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
