//! Uniform dispatch of the four solvers by name.
//!
//! [`Algorithm`] names a solver and [`SolveOptions`] carries the
//! configuration of all of them, so callers such as the command line and
//! the experiment harness can treat each solver as a function of
//! `(Graph, options)`.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::graph::{Graph, Point};
use crate::hds::{HdsConfig, HdsRunner};
use crate::opt_ppp::{OptPppConfig, OptPppRunner};
use crate::opt_prim::{OptPrimConfig, OptPrimRunner};
use crate::ppp::{PppConfig, PppRunner};
use crate::tour::{Tour, TourStatus};

/// One of the four solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Greedy construction.
    Ppp,
    /// Greedy construction followed by 2-opt.
    OptPpp,
    /// Spanning tree preorder.
    OptPrim,
    /// Branch & bound.
    Hds,
}

impl Algorithm {
    /// All solvers, cheapest first.
    pub const ALL: [Algorithm; 4] = [Self::Ppp, Self::OptPpp, Self::OptPrim, Self::Hds];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ppp => "ppp",
            Self::OptPpp => "optppp",
            Self::OptPrim => "optprim",
            Self::Hds => "hds",
        }
    }

    /// Parses a solver name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ppp" | "nn" | "nearest-neighbor" => Some(Self::Ppp),
            "optppp" | "opt-ppp" | "2opt" | "2-opt" => Some(Self::OptPpp),
            "optprim" | "opt-prim" | "mst" => Some(Self::OptPrim),
            "hds" | "bnb" | "branch-and-bound" => Some(Self::Hds),
            _ => None,
        }
    }

    /// Whether the solver's runtime grows exponentially with the number
    /// of points.
    pub fn is_exponential(&self) -> bool {
        matches!(self, Self::Hds)
    }

    /// Runs the solver on `graph`.
    pub fn solve(&self, graph: &Graph, options: &SolveOptions) -> Result<Solution> {
        self.solve_with_cancel(graph, options, None)
    }

    /// Runs the solver with a cancellation token. Only the branch & bound
    /// search polls it; the other solvers finish in polynomial time.
    pub fn solve_with_cancel(
        &self,
        graph: &Graph,
        options: &SolveOptions,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Solution> {
        let started = Instant::now();

        let (tour, status, details) = match self {
            Self::Ppp => {
                let result = PppRunner::run(graph, &options.ppp)?;
                (result.tour, result.status, Details::Ppp)
            }
            Self::OptPpp => {
                let initial = PppRunner::run(graph, &options.ppp)?;
                let result = OptPppRunner::run(graph, &initial.tour.cycle, &options.opt_ppp)?;
                let details = Details::OptPpp {
                    initial_length: result.initial_length,
                    passes: result.passes,
                    moves: result.moves,
                };
                (result.tour, result.status, details)
            }
            Self::OptPrim => {
                let result = OptPrimRunner::run(graph, &options.opt_prim)?;
                let details = Details::OptPrim {
                    mst_weight: result.mst_weight,
                };
                (result.tour, result.status, details)
            }
            Self::Hds => {
                let result = HdsRunner::run_with_cancel(graph, &options.hds, cancel);
                let details = Details::Hds {
                    nodes_expanded: result.nodes_expanded,
                    nodes_pruned: result.nodes_pruned,
                    peak_frontier: result.peak_frontier,
                };
                (result.tour, result.status, details)
            }
        };

        Ok(Solution {
            algorithm: *self,
            tour,
            status,
            elapsed: started.elapsed(),
            details,
        })
    }

    /// Builds a graph from `points` and runs the solver on it.
    ///
    /// Fails with [`Error::InvalidInput`] for fewer than two points or a
    /// non-finite coordinate.
    pub fn solve_points(&self, points: Vec<Point>, options: &SolveOptions) -> Result<Solution> {
        let graph = Graph::new(points)?;
        self.solve(&graph, options)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            Error::invalid_input(format!(
                "unknown algorithm '{s}' (expected ppp, optppp, optprim or hds)"
            ))
        })
    }
}

/// Configuration of every solver.
///
/// # Examples
///
/// ```
/// use u_tsp::solve::SolveOptions;
///
/// let options = SolveOptions::default().with_start(2);
/// assert_eq!(options.ppp.start, 2);
/// assert_eq!(options.opt_prim.root, 2);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOptions {
    pub ppp: PppConfig,
    pub opt_ppp: OptPppConfig,
    pub opt_prim: OptPrimConfig,
    pub hds: HdsConfig,
}

impl SolveOptions {
    /// Sets the first point of the greedy cycle and the spanning tree
    /// root. Branch & bound always fixes point 0.
    pub fn with_start(mut self, start: usize) -> Self {
        self.ppp.start = start;
        self.opt_prim.root = start;
        self
    }

    pub fn with_ppp(mut self, config: PppConfig) -> Self {
        self.ppp = config;
        self
    }

    pub fn with_opt_ppp(mut self, config: OptPppConfig) -> Self {
        self.opt_ppp = config;
        self
    }

    pub fn with_opt_prim(mut self, config: OptPrimConfig) -> Self {
        self.opt_prim = config;
        self
    }

    pub fn with_hds(mut self, config: HdsConfig) -> Self {
        self.hds = config;
        self
    }
}

/// Solver-specific figures reported alongside a tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Details {
    Ppp,
    OptPpp {
        /// Length of the greedy cycle before 2-opt.
        initial_length: f64,
        passes: usize,
        moves: usize,
    },
    OptPrim {
        mst_weight: f64,
    },
    Hds {
        nodes_expanded: usize,
        nodes_pruned: usize,
        peak_frontier: usize,
    },
}

/// Output of one solver run.
#[derive(Debug, Clone)]
pub struct Solution {
    pub algorithm: Algorithm,
    pub tour: Tour,
    pub status: TourStatus,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
    pub details: Details,
}

impl Solution {
    /// Whether the solver reached the guarantee it is designed for.
    pub fn is_complete(&self) -> bool {
        !self.status.is_truncated()
    }
}
