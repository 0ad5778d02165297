//! Dense symmetric distance matrix.

use super::point::Point;

/// Row-major `n × n` matrix of pairwise Euclidean distances.
///
/// Sized once at construction; there is no way to resize or mutate it
/// afterwards. Out-of-range lookups panic like slice indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances between `points`.
    ///
    /// Only the upper triangle is computed; the lower triangle is
    /// mirrored so `get(i, j) == get(j, i)` holds bit-for-bit.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.n && j < self.n,
            "distance index ({i}, {j}) out of range for {} points",
            self.n
        );
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice: distances from `i` to every vertex.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
