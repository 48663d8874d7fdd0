//! Pairwise distances and tour scoring.

use super::city::City;
use crate::error::{AcoError, Result};

/// Euclidean distance between two cities.
#[inline]
pub fn euclidean(a: &City, b: &City) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Symmetric N x N distance matrix, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from a city set.
    ///
    /// Each unordered pair is computed once and written to both
    /// entries, so `get(i, j) == get(j, i)` holds exactly.
    ///
    /// # Errors
    ///
    /// Fails if fewer than two cities are given.
    pub fn from_cities(cities: &[City]) -> Result<Self> {
        let n = cities.len();
        if n < 2 {
            return Err(AcoError::invalid(
                "cities",
                format!("at least 2 cities are required, got {n}"),
            ));
        }

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean(&cities[i], &cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Ok(Self { n, data })
    }

    /// Builds the matrix from explicit rows.
    ///
    /// The rows must form a square, symmetric matrix of finite,
    /// non-negative values with a zero diagonal.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if n < 2 {
            return Err(AcoError::invalid(
                "rows",
                format!("at least 2 cities are required, got {n}"),
            ));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::invalid(
                    "rows",
                    format!("row {i} has {} entries, expected {n}", row.len()),
                ));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(AcoError::invalid(
                        "rows",
                        format!("distance ({i}, {j}) must be finite and non-negative, got {d}"),
                    ));
                }
                if i == j && d != 0.0 {
                    return Err(AcoError::invalid(
                        "rows",
                        format!("diagonal entry ({i}, {i}) must be 0, got {d}"),
                    ));
                }
            }
            data.extend_from_slice(row);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if data[i * n + j] != data[j * n + i] {
                    return Err(AcoError::invalid(
                        "rows",
                        format!("matrix is not symmetric at ({i}, {j})"),
                    ));
                }
            }
        }

        Ok(Self { n, data })
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

    /// Distance from `i` to `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }
}

/// Length of the closed tour: consecutive edges plus the edge from the
/// last city back to the first.
///
/// # Examples
///
/// ```
/// use u_aco::tsp::{score_tour, City, DistanceMatrix};
///
/// let square = [
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 0.0, 1.0),
/// ];
/// let d = DistanceMatrix::from_cities(&square).unwrap();
/// assert!((score_tour(&[0, 1, 2, 3], &d) - 4.0).abs() < 1e-12);
/// ```
pub fn score_tour(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    match (tour.first(), tour.last()) {
        (Some(&first), Some(&last)) => {
            let open: f64 = tour.windows(2).map(|w| distances.get(w[0], w[1])).sum();
            open + distances.get(last, first)
        }
        _ => 0.0,
    }
}
