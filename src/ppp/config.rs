//! PPP configuration.

use crate::error::{Error, Result};

/// How the greedy construction grows the cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construction {
    /// Append the unvisited point nearest to the last appended point.
    #[default]
    NearestNeighbor,

    /// Take the unvisited point nearest to any cycle point and insert it
    /// where it lengthens the cycle least. Slower, usually shorter.
    NearestInsertion,

    /// Take the unvisited point nearest to any cycle point and insert it
    /// directly after that cycle point.
    NearestAttach,
}

/// Configuration for the greedy construction.
///
/// # Examples
///
/// ```
/// use u_tsp::ppp::{Construction, PppConfig};
///
/// let config = PppConfig::default()
///     .with_start(3)
///     .with_construction(Construction::NearestInsertion);
/// assert_eq!(config.start, 3);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PppConfig {
    /// Index of the first point of the cycle.
    pub start: usize,

    /// Growth rule.
    pub construction: Construction,
}

impl PppConfig {
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Validates the configuration against a graph of `n` points.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.start >= n {
            return Err(Error::invalid_input(format!(
                "start index {} out of range for {n} points",
                self.start
            )));
        }
        Ok(())
    }
}
