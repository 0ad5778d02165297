//! Repeated-trial comparison of the solvers on random instances.
//!
//! Each trial draws a fresh uniform instance in the unit square from a
//! seed, runs every selected solver on it and records tour length and
//! wall-clock time. Reports aggregate those per solver and compare
//! solvers by mean length (improvement and gap to the exact optimum).
//! Trials can run in parallel with the `parallel` feature.

mod config;
mod runner;

pub use config::ExperimentConfig;
pub use runner::{AlgorithmStats, ExperimentReport, ExperimentRunner};
