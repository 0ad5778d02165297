//! HDS: exact branch & bound search.
//!
//! Grows partial paths from vertex 0, discarding every path whose lower
//! bound already reaches the best complete tour found. When the search
//! space is exhausted the result is a shortest Hamiltonian cycle. The
//! expansion budget and the optional cancellation token turn it into an
//! anytime search that returns the best tour found so far.
//!
//! The running time is exponential in the worst case; it is intended for
//! small instances (a dozen or so points with default settings).
//!
//! # References
//!
//! - Little, J. D. C., Murty, K. G., Sweeney, D. W. & Karel, C. (1963).
//!   "An algorithm for the traveling salesman problem",
//!   *Operations Research* 11(6), 972-989.
//! - Held, M. & Karp, R. M. (1970). "The traveling-salesman problem and
//!   minimum spanning trees", *Operations Research* 18(6), 1138-1162.

mod bound;
mod config;
mod node;
mod runner;

pub use config::{Exploration, HdsConfig};
pub use runner::{HdsResult, HdsRunner};
