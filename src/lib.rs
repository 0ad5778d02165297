//! Euclidean Traveling Salesman Problem solvers for small point sets.
//!
//! Four interchangeable strategies of increasing cost and quality:
//!
//! - **PPP**: Greedy nearest-neighbor construction. Fast, no quality
//!   guarantee; a nearest-insertion variant is also available.
//! - **OptPPP**: 2-opt local search over any starting cycle. Never
//!   lengthens its input and removes every edge crossing.
//! - **OptPrim**: Minimum spanning tree (Prim) + preorder traversal.
//!   At most twice the optimal length.
//! - **HDS**: Branch & bound with an admissible lower bound. Exact,
//!   exponential worst case; a node budget and a cancellation token
//!   turn it into an anytime search.
//!
//! Every solver reads the same immutable [`Graph`](graph::Graph) and
//! returns a [`Tour`](tour::Tour) with a [`TourStatus`](tour::TourStatus)
//! describing what it can claim about the result.
//!
//! # Architecture
//!
//! The solvers depend only on [`graph`], [`tour`] and [`error`]. The
//! [`solve`] module dispatches them by name; [`points`] reads and writes
//! point files and [`experiments`] runs repeated trials. None of these
//! feed back into solver behavior.
//!
//! # Examples
//!
//! ```
//! use u_tsp::graph::Graph;
//! use u_tsp::solve::{Algorithm, SolveOptions};
//!
//! let graph = Graph::random(10, 42).unwrap();
//! let options = SolveOptions::default();
//! for algorithm in Algorithm::ALL {
//!     let solution = algorithm.solve(&graph, &options).unwrap();
//!     assert!(graph.is_hamiltonian(&solution.tour.cycle));
//! }
//! ```

pub mod error;
pub mod experiments;
pub mod graph;
pub mod hds;
pub mod opt_ppp;
pub mod opt_prim;
pub mod points;
pub mod ppp;
pub mod solve;
pub mod tour;

pub use error::{Error, Result};
pub use graph::{Graph, Point};
pub use solve::{Algorithm, Solution, SolveOptions};
pub use tour::{Tour, TourStatus};
