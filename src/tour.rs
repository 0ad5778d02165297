//! Tours and result states shared by every solver.

use crate::graph::Graph;

/// A closed Hamiltonian cycle and its total length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Point indices in visiting order; the last point connects back to
    /// the first.
    pub cycle: Vec<usize>,
    /// Sum of all edge lengths including the closing edge.
    pub length: f64,
}

impl Tour {
    /// Wraps `cycle` and computes its length on `graph`.
    pub fn new(graph: &Graph, cycle: Vec<usize>) -> Self {
        let length = graph.cycle_length(&cycle);
        Self { cycle, length }
    }

    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty()
    }
}

/// What a solver can claim about the tour it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourStatus {
    /// Valid tour with no quality bound.
    Heuristic,
    /// Within twice the optimum.
    Approximate,
    /// No improving 2-opt move remains.
    LocalOptimum,
    /// Proven globally optimal.
    Optimal,
    /// An iteration or node budget ran out before convergence or proof.
    BudgetExceeded,
    /// Stopped by an external cancellation flag.
    Cancelled,
}

impl TourStatus {
    /// Whether the search stopped before reaching its natural end.
    pub fn is_truncated(self) -> bool {
        matches!(self, Self::BudgetExceeded | Self::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::Approximate => "approximate",
            Self::LocalOptimum => "local-optimum",
            Self::Optimal => "optimal",
            Self::BudgetExceeded => "budget-exceeded",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for TourStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_new_computes_length() {
        let graph = Graph::from_coords(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
        let tour = Tour::new(&graph, vec![0, 1, 2]);
        assert!((tour.length - 12.0).abs() < 1e-12);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
    }

    #[test]
    fn test_status_truncated() {
        assert!(TourStatus::BudgetExceeded.is_truncated());
        assert!(TourStatus::Cancelled.is_truncated());
        assert!(!TourStatus::Optimal.is_truncated());
        assert!(!TourStatus::LocalOptimum.is_truncated());
        assert_eq!(TourStatus::LocalOptimum.to_string(), "local-optimum");
    }
}
