//! Per-ant tour construction with the pseudo-random-proportional rule.

use super::heuristic::HeuristicMatrix;
use super::pheromone::PheromoneMatrix;
use rand::Rng;

/// Builds one tour per call from read-only pheromone and heuristic state.
///
/// At each step from city `r`, every unvisited city `c` is weighted by
/// `tau(r, c) * eta(r, c)^beta`. With probability `q0` the heaviest city
/// is taken (exploitation); otherwise a city is sampled in proportion to
/// its weight (exploration).
///
/// Candidates are always scanned in ascending city index, which fixes
/// both tie-breaking and the sampling order:
///
/// - exploitation keeps the **lowest-index** city among equal maxima;
/// - exploration partitions `[0, 1)` by cumulative probability in index
///   order and takes the first city whose cumulative share exceeds the
///   draw;
/// - if the exploration weights sum to zero or to a non-finite value,
///   the lowest-index unvisited city is taken.
#[derive(Debug, Clone, Copy)]
pub struct TourConstructor<'a> {
    pheromone: &'a PheromoneMatrix,
    heuristic: &'a HeuristicMatrix,
    beta: f64,
    q0: f64,
}

impl<'a> TourConstructor<'a> {
    pub fn new(
        pheromone: &'a PheromoneMatrix,
        heuristic: &'a HeuristicMatrix,
        beta: f64,
        q0: f64,
    ) -> Self {
        debug_assert_eq!(pheromone.len(), heuristic.len());
        Self {
            pheromone,
            heuristic,
            beta,
            q0,
        }
    }

    /// Builds a complete tour starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a valid city index.
    pub fn construct<R: Rng + ?Sized>(&self, start: usize, rng: &mut R) -> Vec<usize> {
        let n = self.heuristic.len();
        assert!(start < n, "start city {start} out of range for {n} cities");

        let mut tour = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        tour.push(start);
        visited[start] = true;

        let mut candidates: Vec<usize> = (0..n).filter(|&c| c != start).collect();
        let mut weights = Vec::with_capacity(candidates.len());
        let mut current = start;

        while tour.len() < n {
            assert!(
                !candidates.is_empty(),
                "no unvisited cities left with {} of {n} placed",
                tour.len()
            );

            weights.clear();
            weights.extend(candidates.iter().map(|&c| self.edge_weight(current, c)));

            let u: f64 = rng.random();
            let pick = if u < self.q0 {
                argmax(&weights)
            } else {
                sample(&weights, rng)
            };

            let next = candidates[pick];
            visited[next] = true;
            tour.push(next);
            candidates.retain(|&c| !visited[c]);
            current = next;
        }

        tour
    }

    #[inline]
    fn edge_weight(&self, from: usize, to: usize) -> f64 {
        self.pheromone.get(from, to) * self.heuristic.weight(from, to, self.beta)
    }
}

/// Position of the first maximum. NaN never wins; if nothing compares,
/// position 0.
fn argmax(weights: &[f64]) -> usize {
    let mut best = 0;
    let mut best_weight = f64::NEG_INFINITY;
    for (i, &w) in weights.iter().enumerate() {
        if w > best_weight {
            best = i;
            best_weight = w;
        }
    }
    best
}

/// Cumulative-distribution inversion over `weights` in slice order.
fn sample<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        tracing::trace!(total, "degenerate selection weights, taking first candidate");
        return 0;
    }

    let v: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w / total;
        if cumulative > v {
            return i;
        }
    }
    // rounding left the final cumulative share at or below v
    weights.len() - 1
}
