//! HDS configuration.

/// Order in which live search nodes are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Exploration {
    /// Always expand the node with the smallest lower bound. Explores the
    /// fewest nodes; the frontier can grow large.
    #[default]
    BestFirst,

    /// Expand the most recently generated node, cheapest child first.
    /// Small frontier, more expansions.
    DepthFirst,
}

/// Configuration for the branch & bound search.
///
/// # Examples
///
/// ```
/// use u_tsp::hds::{Exploration, HdsConfig};
///
/// let config = HdsConfig::default()
///     .with_max_nodes(10_000)
///     .with_simple_bound(true)
///     .with_exploration(Exploration::DepthFirst);
/// assert_eq!(config.max_nodes, 10_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HdsConfig {
    /// Maximum number of node expansions. When reached with live nodes
    /// left, the best tour so far is returned as
    /// [`TourStatus::BudgetExceeded`](crate::tour::TourStatus::BudgetExceeded).
    pub max_nodes: usize,

    /// Use the cheaper, looser bound instead of the half-sum bound.
    pub use_simple_bound: bool,

    /// Node selection order.
    pub exploration: Exploration,

    /// Seed the incumbent with the nearest-neighbor tour instead of
    /// starting from an infinite upper bound.
    pub warm_start: bool,
}

impl Default for HdsConfig {
    fn default() -> Self {
        Self {
            max_nodes: 100_000,
            use_simple_bound: false,
            exploration: Exploration::default(),
            warm_start: true,
        }
    }
}

impl HdsConfig {
    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_simple_bound(mut self, simple: bool) -> Self {
        self.use_simple_bound = simple;
        self
    }

    pub fn with_exploration(mut self, exploration: Exploration) -> Self {
        self.exploration = exploration;
        self
    }

    pub fn with_warm_start(mut self, warm_start: bool) -> Self {
        self.warm_start = warm_start;
        self
    }
}
