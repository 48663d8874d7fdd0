//! Static edge desirability derived from distances.

use crate::tsp::DistanceMatrix;

/// Heuristic value used for coincident cities (distance 0).
///
/// Finite so that `eta^beta` and the products built from it stay
/// comparable numbers for any practical `beta`.
pub const COINCIDENT_HEURISTIC: f64 = 1e6;

/// Inverse-distance heuristic matrix `eta(i, j) = 1 / d(i, j)`.
///
/// Diagonal entries are stored as 0 and never consulted by tour
/// construction, which only scores edges to unvisited cities.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicMatrix {
    n: usize,
    data: Vec<f64>,
}

impl HeuristicMatrix {
    /// Derives the heuristic from a distance matrix.
    pub fn build(distances: &DistanceMatrix) -> Self {
        let n = distances.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d = distances.get(i, j);
                data[i * n + j] = if d > 0.0 {
                    1.0 / d
                } else {
                    COINCIDENT_HEURISTIC
                };
            }
        }
        Self { n, data }
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix holds no cities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// `eta(i, j)`.
    #[inline]
    pub fn eta(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// `eta(i, j)^beta`. A `beta` of 0 makes every edge weigh 1.
    #[inline]
    pub fn weight(&self, i: usize, j: usize, beta: f64) -> f64 {
        let eta = self.eta(i, j);
        if beta == 1.0 {
            eta
        } else {
            eta.powf(beta)
        }
    }
}
