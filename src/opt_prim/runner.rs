//! Spanning-tree approximation.
//!
//! # Algorithm
//!
//! 1. Build a minimum spanning tree `T` with Prim's algorithm
//! 2. Walk `T` in preorder from the root
//! 3. The preorder sequence is the cycle
//!
//! Doubling every tree edge gives a closed walk of weight `2·w(T)`;
//! the preorder is that walk with repeated vertices shortcut, which by
//! the triangle inequality cannot be longer. Since removing one edge
//! from an optimal tour leaves a spanning tree, `w(T) ≤ OPT`, hence the
//! cycle is at most `2·OPT`.

use super::config::OptPrimConfig;
use super::tree::SpanningTree;
use crate::error::Result;
use crate::graph::Graph;
use crate::tour::{Tour, TourStatus};

/// Result of the spanning-tree approximation.
#[derive(Debug, Clone)]
pub struct OptPrimResult {
    /// The preorder tour, starting at the root.
    pub tour: Tour,

    /// Always [`TourStatus::Approximate`].
    pub status: TourStatus,

    /// Total weight of the minimum spanning tree.
    pub mst_weight: f64,
}

impl OptPrimResult {
    /// Tour length divided by the tree weight.
    ///
    /// Lies in `[1, 2]` for Euclidean instances; `None` when every point
    /// coincides and the tree has zero weight.
    pub fn mst_ratio(&self) -> Option<f64> {
        (self.mst_weight > 0.0).then(|| self.tour.length / self.mst_weight)
    }
}

/// Spanning-tree approximation runner.
pub struct OptPrimRunner;

impl OptPrimRunner {
    /// Runs the approximation on `graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::graph::Graph;
    /// use u_tsp::opt_prim::{OptPrimConfig, OptPrimRunner};
    ///
    /// let graph = Graph::random(20, 1).unwrap();
    /// let result = OptPrimRunner::run(&graph, &OptPrimConfig::default()).unwrap();
    /// assert!(graph.is_hamiltonian(&result.tour.cycle));
    /// assert!(result.tour.length <= 2.0 * result.mst_weight + 1e-9);
    /// ```
    pub fn run(graph: &Graph, config: &OptPrimConfig) -> Result<OptPrimResult> {
        config.validate(graph.size())?;

        let tree = SpanningTree::prim(graph, config.root);
        let tour = Tour::new(graph, tree.preorder());

        log::debug!(
            "opt_prim: {} points, mst {:.6}, tour {:.6}",
            graph.size(),
            tree.total_weight(),
            tour.length
        );

        Ok(OptPrimResult {
            tour,
            status: TourStatus::Approximate,
            mst_weight: tree.total_weight(),
        })
    }

    /// Builds only the spanning tree, for callers that want to inspect it.
    pub fn spanning_tree(graph: &Graph, config: &OptPrimConfig) -> Result<SpanningTree> {
        config.validate(graph.size())?;
        Ok(SpanningTree::prim(graph, config.root))
    }
}
