//! OptPPP: 2-opt improvement of an existing cycle.
//!
//! Repeatedly removes pairs of edges and reconnects the cycle the other
//! way round when that is shorter. In the Euclidean plane this removes
//! every edge crossing. Usually fed with the output of
//! [`ppp`](crate::ppp), but any Hamiltonian cycle is accepted.
//!
//! # References
//!
//! - Croes, G. A. (1958). "A method for solving traveling-salesman
//!   problems", *Operations Research* 6(6), 791-812.

mod config;
mod runner;

pub use config::{MoveStrategy, OptPppConfig};
pub use runner::{OptPppResult, OptPppRunner, MIN_GAIN};
