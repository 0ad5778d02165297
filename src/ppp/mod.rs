//! PPP: greedy nearest-neighbor construction.
//!
//! Builds a valid cycle quickly with no quality guarantee. Its output is
//! the usual starting point for [`opt_ppp`](crate::opt_ppp) and the
//! initial upper bound of [`hds`](crate::hds).
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"

mod config;
mod runner;

pub use config::{Construction, PppConfig};
pub use runner::{PppResult, PppRunner};

pub(crate) use runner::nearest_neighbor;
