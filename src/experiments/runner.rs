//! Trial execution and aggregation.

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::ExperimentConfig;
use crate::error::Result;
use crate::graph::Graph;
use crate::solve::{Algorithm, Solution, SolveOptions};

/// Aggregated figures of one solver over all trials.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmStats {
    pub algorithm: Algorithm,
    pub trials: usize,
    pub mean_length: f64,
    /// Population standard deviation.
    pub std_length: f64,
    pub min_length: f64,
    pub max_length: f64,
    /// Seconds.
    pub mean_time: f64,
    pub std_time: f64,
    /// Runs stopped by a budget or cancellation.
    pub truncated: usize,
}

impl AlgorithmStats {
    fn from_solutions(algorithm: Algorithm, solutions: &[&Solution]) -> Self {
        let lengths: Vec<f64> = solutions.iter().map(|s| s.tour.length).collect();
        let times: Vec<f64> = solutions.iter().map(|s| s.elapsed.as_secs_f64()).collect();
        let (mean_length, std_length) = mean_std(&lengths);
        let (mean_time, std_time) = mean_std(&times);

        Self {
            algorithm,
            trials: solutions.len(),
            mean_length,
            std_length,
            min_length: lengths.iter().copied().fold(f64::INFINITY, f64::min),
            max_length: lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean_time,
            std_time,
            truncated: solutions.iter().filter(|s| !s.is_complete()).count(),
        }
    }
}

fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Outcome of one experiment.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentReport {
    pub n: usize,
    pub trials: usize,
    /// One entry per solver that ran, in configuration order.
    pub stats: Vec<AlgorithmStats>,
    /// Solvers skipped because the instances were too large for them.
    pub skipped: Vec<Algorithm>,
}

impl ExperimentReport {
    pub fn stats(&self, algorithm: Algorithm) -> Option<&AlgorithmStats> {
        self.stats.iter().find(|s| s.algorithm == algorithm)
    }

    /// How much longer `a`'s mean tour is than `b`'s, in percent of `b`.
    pub fn gap(&self, a: Algorithm, b: Algorithm) -> Option<f64> {
        let a = self.stats(a)?.mean_length;
        let b = self.stats(b)?.mean_length;
        (b > 0.0).then(|| (a - b) / b * 100.0)
    }

    /// How much shorter `to`'s mean tour is than `from`'s, in percent of
    /// `from`.
    pub fn improvement(&self, from: Algorithm, to: Algorithm) -> Option<f64> {
        let from = self.stats(from)?.mean_length;
        let to = self.stats(to)?.mean_length;
        (from > 0.0).then(|| (from - to) / from * 100.0)
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {}, {} trials", self.n, self.trials)?;
        writeln!(
            f,
            "{:<8} {:>10} {:>10} {:>10} {:>10} {:>12} {:>9}",
            "algo", "mean", "std", "min", "max", "time (s)", "truncated"
        )?;
        for s in &self.stats {
            writeln!(
                f,
                "{:<8} {:>10.6} {:>10.6} {:>10.6} {:>10.6} {:>12.6} {:>9}",
                s.algorithm.as_str(),
                s.mean_length,
                s.std_length,
                s.min_length,
                s.max_length,
                s.mean_time,
                s.truncated
            )?;
        }
        for algorithm in &self.skipped {
            writeln!(f, "{:<8} skipped", algorithm.as_str())?;
        }

        let pairs = [
            (Algorithm::Ppp, Algorithm::OptPpp),
            (Algorithm::OptPpp, Algorithm::OptPrim),
            (Algorithm::Ppp, Algorithm::OptPrim),
        ];
        for (from, to) in pairs {
            if let Some(pct) = self.improvement(from, to) {
                writeln!(f, "{to} vs {from}: {pct:+.2}%")?;
            }
        }
        if self.stats(Algorithm::Hds).is_some() {
            for algorithm in [Algorithm::Ppp, Algorithm::OptPpp, Algorithm::OptPrim] {
                if let Some(pct) = self.gap(algorithm, Algorithm::Hds) {
                    writeln!(f, "gap {algorithm} to optimum: {pct:+.2}%")?;
                }
            }
        }
        Ok(())
    }
}

/// Experiment runner.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs every configured solver on `trials` random instances.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::experiments::{ExperimentConfig, ExperimentRunner};
    /// use u_tsp::solve::Algorithm;
    ///
    /// let config = ExperimentConfig::default().with_n(8).with_trials(5);
    /// let report = ExperimentRunner::run(&config).unwrap();
    /// let gap = report.gap(Algorithm::OptPrim, Algorithm::Hds).unwrap();
    /// assert!(gap >= -1e-9);
    /// ```
    pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport> {
        config.validate()?;

        let options = config.solve_options();
        let (active, skipped): (Vec<Algorithm>, Vec<Algorithm>) = config
            .algorithms
            .iter()
            .copied()
            .partition(|&a| config.runs(a));
        if !skipped.is_empty() {
            log::info!(
                "experiments: skipping {:?} at n = {} (limit {})",
                skipped,
                config.n,
                config.hds_max_n
            );
        }

        let trials = run_trials(config, &active, &options)?;

        let stats = active
            .iter()
            .enumerate()
            .map(|(k, &algorithm)| {
                let solutions: Vec<&Solution> = trials.iter().map(|t| &t[k]).collect();
                AlgorithmStats::from_solutions(algorithm, &solutions)
            })
            .collect();

        log::debug!(
            "experiments: {} trials of {} solvers at n = {}",
            config.trials,
            active.len(),
            config.n
        );

        Ok(ExperimentReport {
            n: config.n,
            trials: config.trials,
            stats,
            skipped,
        })
    }

    /// Runs `template` once per instance size.
    pub fn scalability(sizes: &[usize], template: &ExperimentConfig) -> Result<Vec<ExperimentReport>> {
        sizes
            .iter()
            .map(|&n| {
                log::info!("experiments: scalability step n = {n}");
                Self::run(&template.clone().with_n(n))
            })
            .collect()
    }
}

fn run_trial(
    config: &ExperimentConfig,
    active: &[Algorithm],
    options: &SolveOptions,
    trial: usize,
) -> Result<Vec<Solution>> {
    let graph = Graph::random(config.n, config.seed.wrapping_add(trial as u64))?;
    active.iter().map(|a| a.solve(&graph, options)).collect()
}

#[cfg(feature = "parallel")]
fn run_trials(
    config: &ExperimentConfig,
    active: &[Algorithm],
    options: &SolveOptions,
) -> Result<Vec<Vec<Solution>>> {
    if config.parallel {
        (0..config.trials)
            .into_par_iter()
            .map(|i| run_trial(config, active, options, i))
            .collect()
    } else {
        (0..config.trials)
            .map(|i| run_trial(config, active, options, i))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_trials(
    config: &ExperimentConfig,
    active: &[Algorithm],
    options: &SolveOptions,
) -> Result<Vec<Vec<Solution>>> {
    (0..config.trials)
        .map(|i| run_trial(config, active, options, i))
        .collect()
}
