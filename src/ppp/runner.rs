//! Greedy cycle construction.
//!
//! # Algorithm (nearest neighbor)
//!
//! 1. Start the cycle at `start`
//! 2. Append the unvisited point nearest to the last appended point
//!    (lowest index on ties)
//! 3. Repeat until every point is visited; the cycle closes back to
//!    `start`
//!
//! Each step scans the remaining points once, so the whole construction
//! is quadratic in the number of points.

use super::config::{Construction, PppConfig};
use crate::error::Result;
use crate::graph::Graph;
use crate::tour::{Tour, TourStatus};

/// Result of a greedy construction.
#[derive(Debug, Clone)]
pub struct PppResult {
    /// The constructed tour, starting at the configured start index.
    pub tour: Tour,

    /// Always [`TourStatus::Heuristic`].
    pub status: TourStatus,
}

/// Greedy construction runner.
pub struct PppRunner;

impl PppRunner {
    /// Builds a cycle on `graph`.
    ///
    /// Fails if `config.start` is not a valid point index.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::graph::Graph;
    /// use u_tsp::ppp::{PppConfig, PppRunner};
    ///
    /// let graph = Graph::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
    /// let result = PppRunner::run(&graph, &PppConfig::default()).unwrap();
    /// assert_eq!(result.tour.cycle, vec![0, 1, 2, 3]);
    /// ```
    pub fn run(graph: &Graph, config: &PppConfig) -> Result<PppResult> {
        config.validate(graph.size())?;

        let cycle = match config.construction {
            Construction::NearestNeighbor => nearest_neighbor(graph, config.start),
            Construction::NearestInsertion => nearest_insertion(graph, config.start),
            Construction::NearestAttach => nearest_attach(graph, config.start),
        };
        let tour = Tour::new(graph, cycle);

        log::debug!(
            "ppp: {:?} from {} on {} points, length {:.6}",
            config.construction,
            config.start,
            graph.size(),
            tour.length
        );

        Ok(PppResult {
            tour,
            status: TourStatus::Heuristic,
        })
    }
}

/// Nearest-neighbor cycle from `start`. `start` must be in range.
pub(crate) fn nearest_neighbor(graph: &Graph, start: usize) -> Vec<usize> {
    let n = graph.size();
    let mut visited = vec![false; n];
    let mut cycle = Vec::with_capacity(n);

    visited[start] = true;
    cycle.push(start);
    let mut last = start;

    for _ in 1..n {
        let mut next = None;
        let mut min_dist = f64::INFINITY;
        let row = graph.distances().row(last);
        for v in (0..n).filter(|&v| !visited[v]) {
            let d = row[v];
            // Strict comparison keeps the lowest index on ties.
            if d < min_dist {
                min_dist = d;
                next = Some(v);
            }
        }

        let Some(v) = next else { break };
        visited[v] = true;
        cycle.push(v);
        last = v;
    }

    cycle
}

/// Nearest-insertion cycle from `start`.
///
/// The chosen point is the unvisited one closest to any cycle point; it
/// is inserted on the cycle edge where it adds the least length. The
/// closing edge is position `len`, so `start` stays first.
fn nearest_insertion(graph: &Graph, start: usize) -> Vec<usize> {
    let n = graph.size();
    let mut in_cycle = vec![false; n];
    let mut cycle = Vec::with_capacity(n);

    in_cycle[start] = true;
    cycle.push(start);

    while cycle.len() < n {
        let mut best_point = None;
        let mut min_dist = f64::INFINITY;
        for p in (0..n).filter(|&p| !in_cycle[p]) {
            for &c in &cycle {
                let d = graph.distance(p, c);
                if d < min_dist {
                    min_dist = d;
                    best_point = Some(p);
                }
            }
        }
        let Some(p) = best_point else { break };

        let len = cycle.len();
        let mut best_pos = len;
        let mut min_increase = f64::INFINITY;
        for pos in 1..=len {
            let prev = cycle[pos - 1];
            let next = cycle[pos % len];
            let increase =
                graph.distance(prev, p) + graph.distance(p, next) - graph.distance(prev, next);
            if increase < min_increase {
                min_increase = increase;
                best_pos = pos;
            }
        }

        cycle.insert(best_pos, p);
        in_cycle[p] = true;
    }

    cycle
}

/// Nearest-attach cycle from `start`.
///
/// Same choice of point as nearest insertion, but the point goes right
/// after the cycle point it is closest to. Ties go to the lowest point
/// index, then the earliest cycle position.
fn nearest_attach(graph: &Graph, start: usize) -> Vec<usize> {
    let n = graph.size();
    let mut in_cycle = vec![false; n];
    let mut cycle = Vec::with_capacity(n);

    in_cycle[start] = true;
    cycle.push(start);

    while cycle.len() < n {
        let mut best = None;
        let mut min_dist = f64::INFINITY;
        for p in (0..n).filter(|&p| !in_cycle[p]) {
            let row = graph.distances().row(p);
            for (pos, &c) in cycle.iter().enumerate() {
                if row[c] < min_dist {
                    min_dist = row[c];
                    best = Some((p, pos));
                }
            }
        }
        let Some((p, pos)) = best else { break };

        cycle.insert(pos + 1, p);
        in_cycle[p] = true;
    }

    cycle
}
