//! 2-opt local search.
//!
//! # Algorithm
//!
//! 1. Take a starting cycle (typically from [`ppp`](crate::ppp))
//! 2. For each pair of non-adjacent edges `(a, b)` at positions `i, i+1`
//!    and `(c, d)` at `j, j+1`, the reversal of `cycle[i+1..=j]` replaces
//!    them with `(a, c)` and `(b, d)`; its gain is
//!    `d(a,b) + d(c,d) − d(a,c) − d(b,d)`
//! 3. Apply the first move with a strictly positive gain and restart the
//!    scan (or, with [`MoveStrategy::Sweep`], keep scanning; with
//!    [`MoveStrategy::BestImprovement`], apply only the largest)
//! 4. Stop after a pass with no improving move, or when the pass budget
//!    runs out
//!
//! Every applied move shortens the cycle by more than [`MIN_GAIN`], and
//! the length is bounded below, so the search terminates at a 2-opt
//! local optimum. The first cycle position is never moved.

use super::config::{MoveStrategy, OptPppConfig};
use crate::error::Result;
use crate::graph::Graph;
use crate::tour::{Tour, TourStatus};

/// Smallest gain accepted as an improvement.
///
/// Equal-length moves are never taken; this also absorbs rounding noise
/// so degenerate ties cannot cycle.
pub const MIN_GAIN: f64 = 1e-10;

/// Result of a 2-opt run.
#[derive(Debug, Clone)]
pub struct OptPppResult {
    /// The improved tour.
    pub tour: Tour,

    /// [`TourStatus::LocalOptimum`] on convergence, otherwise
    /// [`TourStatus::BudgetExceeded`].
    pub status: TourStatus,

    /// Length of the starting cycle.
    pub initial_length: f64,

    /// Passes executed, including the final pass that found nothing.
    pub passes: usize,

    /// Segment reversals applied.
    pub moves: usize,
}

impl OptPppResult {
    /// Relative improvement over the starting cycle, in percent.
    pub fn improvement_percent(&self) -> f64 {
        if self.initial_length > 0.0 {
            (self.initial_length - self.tour.length) / self.initial_length * 100.0
        } else {
            0.0
        }
    }
}

/// 2-opt runner.
pub struct OptPppRunner;

impl OptPppRunner {
    /// Improves `initial` on `graph`.
    ///
    /// Fails if `initial` is not a Hamiltonian cycle of `graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::graph::Graph;
    /// use u_tsp::opt_ppp::{OptPppConfig, OptPppRunner};
    ///
    /// let graph = Graph::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
    /// // Crossed cycle: 0 → 2 → 1 → 3
    /// let result = OptPppRunner::run(&graph, &[0, 2, 1, 3], &OptPppConfig::default()).unwrap();
    /// assert!((result.tour.length - 4.0).abs() < 1e-12);
    /// ```
    pub fn run(graph: &Graph, initial: &[usize], config: &OptPppConfig) -> Result<OptPppResult> {
        graph.check_cycle(initial)?;

        let initial_length = graph.cycle_length(initial);
        let mut cycle = initial.to_vec();
        let mut passes = 0usize;
        let mut moves = 0usize;

        let status = loop {
            if config.max_iterations.is_some_and(|max| passes >= max) {
                break TourStatus::BudgetExceeded;
            }
            passes += 1;

            let applied = match config.strategy {
                MoveStrategy::FirstImprovement => first_improvement_pass(graph, &mut cycle),
                MoveStrategy::Sweep => sweep_pass(graph, &mut cycle),
                MoveStrategy::BestImprovement => best_improvement_pass(graph, &mut cycle),
            };
            moves += applied;

            if applied == 0 {
                break TourStatus::LocalOptimum;
            }
        };

        let tour = Tour::new(graph, cycle);

        if status == TourStatus::BudgetExceeded {
            log::warn!(
                "opt_ppp: pass budget of {passes} exhausted before convergence, length {:.6}",
                tour.length
            );
        }
        log::debug!(
            "opt_ppp: {passes} passes, {moves} moves, {:.6} -> {:.6}",
            initial_length,
            tour.length
        );

        Ok(OptPppResult {
            tour,
            status,
            initial_length,
            passes,
            moves,
        })
    }

    /// Whether no 2-opt move improves `cycle` by more than [`MIN_GAIN`].
    pub fn is_local_optimum(graph: &Graph, cycle: &[usize]) -> bool {
        let n = cycle.len();
        if n < 4 {
            return true;
        }
        pairs(n).all(|(i, j)| gain(graph, cycle, i, j) <= MIN_GAIN)
    }
}

/// Position pairs `(i, j)` whose edges share no vertex, in scan order.
fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n.saturating_sub(2))
        .flat_map(move |i| ((i + 2)..n).map(move |j| (i, j)))
        .filter(move |&(i, j)| !(i == 0 && j == n - 1))
}

/// Length saved by reversing `cycle[i+1..=j]`.
#[inline]
fn gain(graph: &Graph, cycle: &[usize], i: usize, j: usize) -> f64 {
    let n = cycle.len();
    let (a, b) = (cycle[i], cycle[i + 1]);
    let (c, d) = (cycle[j], cycle[(j + 1) % n]);
    graph.distance(a, b) + graph.distance(c, d) - graph.distance(a, c) - graph.distance(b, d)
}

/// Applies the first improving move in scan order, if any. The next pass
/// rescans from the first pair.
fn first_improvement_pass(graph: &Graph, cycle: &mut [usize]) -> usize {
    let n = cycle.len();
    match pairs(n).find(|&(i, j)| gain(graph, cycle, i, j) > MIN_GAIN) {
        Some((i, j)) => {
            cycle[i + 1..=j].reverse();
            1
        }
        None => 0,
    }
}

/// One scan applying every improving move in scan order. Returns the
/// number of moves applied.
fn sweep_pass(graph: &Graph, cycle: &mut [usize]) -> usize {
    let n = cycle.len();
    if n < 4 {
        return 0;
    }

    let mut applied = 0;
    for i in 0..n - 2 {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if gain(graph, cycle, i, j) > MIN_GAIN {
                cycle[i + 1..=j].reverse();
                applied += 1;
            }
        }
    }
    applied
}

/// One scan applying only the largest improving move.
fn best_improvement_pass(graph: &Graph, cycle: &mut [usize]) -> usize {
    let n = cycle.len();
    if n < 4 {
        return 0;
    }

    let mut best = None;
    let mut best_gain = MIN_GAIN;
    for (i, j) in pairs(n) {
        let g = gain(graph, cycle, i, j);
        if g > best_gain {
            best_gain = g;
            best = Some((i, j));
        }
    }

    match best {
        Some((i, j)) => {
            cycle[i + 1..=j].reverse();
            1
        }
        None => 0,
    }
}
