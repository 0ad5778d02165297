//! Branch & bound execution loop.
//!
//! # Algorithm
//!
//! 1. Incumbent := nearest-neighbor tour (or +∞ without warm start)
//! 2. Root := path `[0]`; fixing the first vertex removes rotations
//! 3. Pop the next live node; discard it if its bound reaches the
//!    incumbent length
//! 4. Expand: one child per unvisited vertex. A child that completes the
//!    path is closed into a cycle and replaces the incumbent if strictly
//!    shorter; otherwise its bound is computed and it is kept only if
//!    below the incumbent
//! 5. Stop when no live node remains (the incumbent is optimal), the
//!    expansion budget is spent, or cancellation is requested

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::bound::{self, BoundFn};
use super::config::HdsConfig;
use super::node::{Frontier, SearchNode};
use crate::graph::Graph;
use crate::ppp::nearest_neighbor;
use crate::tour::{Tour, TourStatus};

/// Result of a branch & bound run.
#[derive(Debug, Clone)]
pub struct HdsResult {
    /// Best tour found, starting at vertex 0.
    pub tour: Tour,

    /// [`TourStatus::Optimal`] when the search space was exhausted,
    /// [`TourStatus::BudgetExceeded`] or [`TourStatus::Cancelled`]
    /// otherwise.
    pub status: TourStatus,

    /// Nodes expanded (the quantity limited by `max_nodes`).
    pub nodes_expanded: usize,

    /// Nodes discarded because their bound reached the incumbent.
    pub nodes_pruned: usize,

    /// Largest number of live nodes held at once.
    pub peak_frontier: usize,

    /// Incumbent length before the search started (+∞ without warm start).
    pub initial_upper_bound: f64,
}

impl HdsResult {
    pub fn is_optimal(&self) -> bool {
        self.status == TourStatus::Optimal
    }
}

/// Branch & bound runner.
pub struct HdsRunner;

impl HdsRunner {
    /// Searches for a shortest tour on `graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::graph::Graph;
    /// use u_tsp::hds::{HdsConfig, HdsRunner};
    ///
    /// let graph = Graph::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
    /// let result = HdsRunner::run(&graph, &HdsConfig::default());
    /// assert!(result.is_optimal());
    /// assert!((result.tour.length - 4.0).abs() < 1e-12);
    /// ```
    pub fn run(graph: &Graph, config: &HdsConfig) -> HdsResult {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs the search with an optional cancellation token, polled once
    /// per expansion.
    pub fn run_with_cancel(
        graph: &Graph,
        config: &HdsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> HdsResult {
        let n = graph.size();
        let bound_fn: BoundFn = if config.use_simple_bound {
            bound::simple
        } else {
            bound::half_sum
        };

        let mut best_cycle = config.warm_start.then(|| nearest_neighbor(graph, 0));
        let mut best_length = best_cycle
            .as_deref()
            .map_or(f64::INFINITY, |c| graph.cycle_length(c));
        let initial_upper_bound = best_length;

        let mut nodes_expanded = 0usize;
        let mut nodes_pruned = 0usize;
        let mut seq = 0u64;

        let mut frontier = Frontier::new(config.exploration);
        let mut root_visited = vec![false; n];
        root_visited[0] = true;
        let root_bound = bound_fn(graph, &[0], &root_visited, 0.0);
        frontier.extend(vec![SearchNode {
            path: vec![0],
            visited: root_visited,
            cost: 0.0,
            bound: root_bound,
            seq,
        }]);
        seq += 1;
        let mut peak_frontier = frontier.len();

        let mut status = TourStatus::Optimal;
        while let Some(node) = frontier.pop() {
            if node.bound >= best_length {
                nodes_pruned += 1;
                continue;
            }
            if cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                status = TourStatus::Cancelled;
                break;
            }
            if nodes_expanded >= config.max_nodes {
                status = TourStatus::BudgetExceeded;
                break;
            }
            nodes_expanded += 1;

            let last = node.path[node.path.len() - 1];
            let mut children = Vec::new();
            for v in (0..n).filter(|&v| !node.visited[v]) {
                let cost = node.cost + graph.distance(last, v);
                let mut path = Vec::with_capacity(node.path.len() + 1);
                path.extend_from_slice(&node.path);
                path.push(v);

                if path.len() == n {
                    let total = cost + graph.distance(v, path[0]);
                    if total < best_length {
                        log::trace!("hds: incumbent {best_length:.6} -> {total:.6}");
                        best_length = total;
                        best_cycle = Some(path);
                    }
                    continue;
                }

                let mut visited = node.visited.clone();
                visited[v] = true;
                let bound = bound_fn(graph, &path, &visited, cost);
                if bound >= best_length {
                    nodes_pruned += 1;
                    continue;
                }

                children.push(SearchNode {
                    path,
                    visited,
                    cost,
                    bound,
                    seq,
                });
                seq += 1;
            }

            frontier.extend(children);
            peak_frontier = peak_frontier.max(frontier.len());
        }

        match status {
            TourStatus::BudgetExceeded => log::warn!(
                "hds: node budget of {} exhausted with {} live nodes, result may not be optimal",
                config.max_nodes,
                frontier.len() + 1
            ),
            TourStatus::Cancelled => log::warn!("hds: cancelled after {nodes_expanded} expansions"),
            _ => {}
        }

        // Without warm start a truncated search may not have completed a
        // single cycle.
        let cycle = best_cycle.unwrap_or_else(|| nearest_neighbor(graph, 0));
        let tour = Tour::new(graph, cycle);

        log::debug!(
            "hds: {status} on {n} points, length {:.6}, {nodes_expanded} expanded, {nodes_pruned} pruned, peak frontier {peak_frontier}",
            tour.length
        );

        HdsResult {
            tour,
            status,
            nodes_expanded,
            nodes_pruned,
            peak_frontier,
            initial_upper_bound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hds::Exploration;

    fn unit_square() -> Graph {
        Graph::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    /// Shortest cycle by enumerating every permutation with vertex 0 first.
    fn brute_force(graph: &Graph) -> f64 {
        fn permute(graph: &Graph, path: &mut Vec<usize>, used: &mut [bool], best: &mut f64) {
            let n = graph.size();
            if path.len() == n {
                *best = best.min(graph.cycle_length(path));
                return;
            }
            for v in 1..n {
                if !used[v] {
                    used[v] = true;
                    path.push(v);
                    permute(graph, path, used, best);
                    path.pop();
                    used[v] = false;
                }
            }
        }

        let mut used = vec![false; graph.size()];
        used[0] = true;
        let mut best = f64::INFINITY;
        permute(graph, &mut vec![0], &mut used, &mut best);
        best
    }

    #[test]
    fn test_hds_unit_square() {
        let graph = unit_square();
        let result = HdsRunner::run(&graph, &HdsConfig::default());

        assert_eq!(result.status, TourStatus::Optimal);
        assert!((result.tour.length - 4.0).abs() < 1e-12);
        assert!(graph.is_hamiltonian(&result.tour.cycle));
    }

    #[test]
    fn test_hds_unit_square_cold_start() {
        let graph = unit_square();
        let config = HdsConfig::default().with_warm_start(false);
        let result = HdsRunner::run(&graph, &config);

        assert!(result.is_optimal());
        assert!((result.tour.length - 4.0).abs() < 1e-12);
        assert!(result.initial_upper_bound.is_infinite());
        assert!(result.nodes_expanded > 0);
    }

    #[test]
    fn test_hds_two_points() {
        let graph = Graph::from_coords(&[(0.0, 0.0), (1.0, 0.0)]).unwrap();
        let result = HdsRunner::run(&graph, &HdsConfig::default());
        assert!(result.is_optimal());
        assert_eq!(result.tour.cycle, vec![0, 1]);
        assert!((result.tour.length - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_hds_matches_brute_force() {
        for seed in 0..6 {
            let graph = Graph::random(7, seed).unwrap();
            let exact = brute_force(&graph);
            let result = HdsRunner::run(&graph, &HdsConfig::default());

            assert!(result.is_optimal());
            assert!(
                (result.tour.length - exact).abs() < 1e-9,
                "seed {seed}: hds {} vs brute force {exact}",
                result.tour.length
            );
        }
    }

    #[test]
    fn test_hds_all_variants_agree() {
        let graph = Graph::random(8, 42).unwrap();
        let exact = brute_force(&graph);
        for simple in [false, true] {
            for exploration in [Exploration::BestFirst, Exploration::DepthFirst] {
                for warm in [false, true] {
                    let config = HdsConfig::default()
                        .with_simple_bound(simple)
                        .with_exploration(exploration)
                        .with_warm_start(warm);
                    let result = HdsRunner::run(&graph, &config);
                    assert!(result.is_optimal(), "{config:?} did not finish");
                    assert!(
                        (result.tour.length - exact).abs() < 1e-9,
                        "{config:?}: {} vs {exact}",
                        result.tour.length
                    );
                }
            }
        }
    }

    #[test]
    fn test_hds_budget_exceeded() {
        let graph = Graph::random(10, 5).unwrap();
        let config = HdsConfig::default().with_max_nodes(1).with_warm_start(false);
        let result = HdsRunner::run(&graph, &config);

        assert_eq!(result.status, TourStatus::BudgetExceeded);
        assert!(!result.is_optimal());
        assert_eq!(result.nodes_expanded, 1);
        assert!(graph.is_hamiltonian(&result.tour.cycle));
    }

    #[test]
    fn test_hds_budget_keeps_warm_start_tour() {
        let graph = Graph::random(11, 13).unwrap();
        let config = HdsConfig::default().with_max_nodes(3);
        let result = HdsRunner::run(&graph, &config);

        assert!(graph.is_hamiltonian(&result.tour.cycle));
        assert!(result.tour.length <= result.initial_upper_bound + 1e-12);
    }

    #[test]
    fn test_hds_cancelled() {
        let graph = Graph::random(9, 1).unwrap();
        let cancel = Arc::new(AtomicBool::new(true));
        let config = HdsConfig::default().with_warm_start(false);
        let result = HdsRunner::run_with_cancel(&graph, &config, Some(cancel));

        assert_eq!(result.status, TourStatus::Cancelled);
        assert_eq!(result.nodes_expanded, 0);
        assert!(graph.is_hamiltonian(&result.tour.cycle));
    }

    #[test]
    fn test_hds_never_worse_than_warm_start() {
        let graph = Graph::random(9, 21).unwrap();
        let result = HdsRunner::run(&graph, &HdsConfig::default());

        assert!(result.is_optimal());
        assert!(result.tour.length <= result.initial_upper_bound + 1e-12);
        assert_eq!(result.tour.cycle[0], 0);
    }

    #[test]
    fn test_hds_deterministic() {
        let graph = Graph::random(8, 77).unwrap();
        let a = HdsRunner::run(&graph, &HdsConfig::default());
        let b = HdsRunner::run(&graph, &HdsConfig::default());
        assert_eq!(a.tour.cycle, b.tour.cycle);
        assert_eq!(a.tour.length.to_bits(), b.tour.length.to_bits());
        assert_eq!(a.nodes_expanded, b.nodes_expanded);
    }
}
