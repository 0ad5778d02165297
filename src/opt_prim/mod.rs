//! OptPrim: minimum spanning tree + preorder traversal.
//!
//! A 2-approximation for metric TSP. The Euclidean distance matrix of a
//! [`Graph`](crate::graph::Graph) satisfies the triangle inequality, so
//! the returned tour is never longer than twice the optimum.
//!
//! # References
//!
//! - Prim, R. C. (1957). "Shortest connection networks and some
//!   generalizations", *Bell System Technical Journal* 36(6).
//! - Cormen et al., *Introduction to Algorithms*, §35.2.1.

mod config;
mod runner;
mod tree;

pub use config::OptPrimConfig;
pub use runner::{OptPrimResult, OptPrimRunner};
pub use tree::SpanningTree;
