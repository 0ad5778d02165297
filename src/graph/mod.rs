//! Complete Euclidean graph over a point set.
//!
//! [`Graph`] owns the points and a [`DistanceMatrix`] computed once at
//! construction. Every solver reads distances from it and never
//! recomputes them; the graph is immutable and can be shared across
//! threads by reference.
//!
//! # References
//!
//! - Cormen, Leiserson, Rivest & Stein, *Introduction to Algorithms*,
//!   ch. 35 "Approximation Algorithms" (the traveling-salesman problem)

mod geometry;
mod matrix;
mod point;

pub use geometry::segments_cross;
pub use matrix::DistanceMatrix;
pub use point::{random_points, Point};

use crate::error::{Error, Result};

/// Minimum number of points for a tour to exist.
pub const MIN_POINTS: usize = 2;

/// A complete graph with Euclidean edge weights.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Graph;
///
/// let graph = Graph::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// assert_eq!(graph.size(), 4);
/// assert!((graph.cycle_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
/// assert!(graph.is_hamiltonian(&[2, 0, 3, 1]));
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    points: Vec<Point>,
    distances: DistanceMatrix,
}

impl Graph {
    /// Builds a graph from a point set.
    ///
    /// Fails with [`Error::InvalidInput`] when fewer than two points are
    /// given or any coordinate is NaN or infinite.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < MIN_POINTS {
            return Err(Error::invalid_input(format!(
                "need at least {MIN_POINTS} points, got {}",
                points.len()
            )));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::invalid_input(format!(
                "point {i} has a non-finite coordinate: ({}, {})",
                points[i].x, points[i].y
            )));
        }

        let distances = DistanceMatrix::from_points(&points);
        Ok(Self { points, distances })
    }

    /// Builds a graph from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// Builds a graph of `n` pseudo-random points in the unit square.
    pub fn random(n: usize, seed: u64) -> Result<Self> {
        Self::new(random_points(n, seed))
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, i: usize) -> Point {
        self.points[i]
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Euclidean distance between points `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances.get(i, j)
    }

    /// Whether `cycle` visits every point exactly once.
    pub fn is_hamiltonian(&self, cycle: &[usize]) -> bool {
        let n = self.size();
        if cycle.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &v in cycle {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    /// Total length of `cycle`, including the closing edge back to the
    /// first point.
    pub fn cycle_length(&self, cycle: &[usize]) -> f64 {
        let n = cycle.len();
        (0..n)
            .map(|i| self.distance(cycle[i], cycle[(i + 1) % n]))
            .sum()
    }

    /// Validates `cycle` for use as solver input.
    pub fn check_cycle(&self, cycle: &[usize]) -> Result<()> {
        if self.is_hamiltonian(cycle) {
            Ok(())
        } else {
            Err(Error::invalid_input(format!(
                "cycle of length {} is not a permutation of 0..{}",
                cycle.len(),
                self.size()
            )))
        }
    }

    /// Number of pairs of non-adjacent cycle edges that cross each other
    /// in the plane.
    ///
    /// A shortest Euclidean tour has no crossings.
    pub fn crossings(&self, cycle: &[usize]) -> usize {
        let n = cycle.len();
        if n < 4 {
            return 0;
        }

        let mut count = 0;
        for i in 0..n {
            let p1 = &self.points[cycle[i]];
            let p2 = &self.points[cycle[(i + 1) % n]];
            for j in (i + 2)..n {
                if (j + 1) % n == i {
                    continue;
                }
                let p3 = &self.points[cycle[j]];
                let p4 = &self.points[cycle[(j + 1) % n]];
                if segments_cross(p1, p2, p3, p4) {
                    count += 1;
                }
            }
        }
        count
    }
}
