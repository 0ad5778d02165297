//! OptPrim configuration.

use crate::error::{Error, Result};

/// Configuration for the spanning-tree approximation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptPrimConfig {
    /// Vertex the tree grows from; also the first vertex of the cycle.
    pub root: usize,
}

impl OptPrimConfig {
    pub fn with_root(mut self, root: usize) -> Self {
        self.root = root;
        self
    }

    /// Validates the configuration against a graph of `n` points.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.root >= n {
            return Err(Error::invalid_input(format!(
                "root index {} out of range for {n} points",
                self.root
            )));
        }
        Ok(())
    }
}
