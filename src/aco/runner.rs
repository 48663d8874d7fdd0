//! ACO optimization loop.
//!
//! [`AcoRunner`] owns the pheromone matrix and the best-so-far state for
//! a run and drives one [`run_generation`] call per generation.

use super::colony::{run_generation, ColonyContext, SearchState};
use super::config::AcoConfig;
use super::heuristic::HeuristicMatrix;
use super::pheromone::PheromoneMatrix;
use crate::error::Result;
use crate::random::create_rng;
use crate::tsp::{City, DistanceMatrix};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::instrument;

/// Result of an ACO run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best tour found, as a permutation of city indices.
    pub best_tour: Vec<usize>,

    /// Closed length of `best_tour`.
    pub best_score: f64,

    /// Best score after each generation. Non-increasing.
    pub score_history: Vec<f64>,

    /// Shortest tour built within each generation.
    pub iteration_best_history: Vec<f64>,

    /// Number of generations executed.
    pub iterations: usize,

    /// Whether the run stopped on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Pheromone matrix at the end of the run.
    pub pheromone: PheromoneMatrix,
}

/// Executes the ant colony search.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner};
/// use u_aco::random::create_rng;
/// use u_aco::tsp::{generate_cities, CityLayout};
///
/// let cities = generate_cities(15, CityLayout::default(), &mut create_rng(1)).unwrap();
/// let config = AcoConfig::default().with_max_iterations(20).with_seed(42);
/// let result = AcoRunner::solve(&cities, &config).unwrap();
/// assert_eq!(result.best_tour.len(), 15);
/// assert_eq!(result.score_history.len(), 20);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the search over an explicit distance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidArgument`](crate::AcoError::InvalidArgument)
    /// if the configuration is invalid. No search work is done in that case.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult> {
        Self::run_with_cancel(distances, config, None)
    }

    /// Builds the distance matrix for `cities` and runs the search.
    pub fn solve(cities: &[City], config: &AcoConfig) -> Result<AcoResult> {
        config.validate()?;
        let distances = DistanceMatrix::from_cities(cities)?;
        Self::run(&distances, config)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked before each generation. A cancelled run
    /// returns the best tour found so far; if cancelled before the first
    /// generation the tour is empty and the score infinite.
    #[instrument(skip_all, fields(cities = distances.len(), ants = config.num_ants))]
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let heuristic = HeuristicMatrix::build(distances);
        let mut pheromone = PheromoneMatrix::initialize(distances.len());
        let mut state = SearchState::new();
        state.score_history.reserve(config.max_iterations);
        let mut iteration_best_history = Vec::with_capacity(config.max_iterations);

        let ctx = ColonyContext {
            distances,
            heuristic: &heuristic,
            config,
        };

        tracing::info!(
            max_iterations = config.max_iterations,
            beta = config.beta,
            q0 = config.q0,
            rho = config.rho,
            "starting ant colony search"
        );

        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        while state.generation < config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let summary = run_generation(&ctx, &mut pheromone, &mut state, &mut rng);
            state.generation += 1;
            state.score_history.push(state.best_score);
            iteration_best_history.push(summary.iteration_best);

            tracing::debug!(
                generation = state.generation,
                iteration_best = summary.iteration_best,
                best = state.best_score,
                "generation complete"
            );

            if summary.improved {
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        tracing::info!(
            best = state.best_score,
            iterations = state.generation,
            stagnated,
            cancelled,
            "ant colony search finished"
        );

        Ok(AcoResult {
            best_tour: state.best_tour,
            best_score: state.best_score,
            score_history: state.score_history,
            iteration_best_history,
            iterations: state.generation,
            stagnated,
            cancelled,
            pheromone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AcoError;
    use crate::tsp::{generate_cities, score_tour, CityLayout};

    fn is_permutation(tour: &[usize], n: usize) -> bool {
        let mut sorted = tour.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    fn unit_square() -> Vec<City> {
        vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 1.0, 0.0),
            City::new(2, 1.0, 1.0),
            City::new(3, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_square_greedy_finds_perimeter() {
        let config = AcoConfig::default()
            .with_num_ants(4)
            .with_max_iterations(1)
            .with_beta(1.0)
            .with_q0(1.0)
            .with_seed(42);
        let result = AcoRunner::solve(&unit_square(), &config).unwrap();
        assert!((result.best_score - 4.0).abs() < 1e-12);
        assert!(is_permutation(&result.best_tour, 4));
    }

    #[test]
    fn test_single_ant_single_generation_no_evaporation() {
        let distances = DistanceMatrix::from_cities(&unit_square()).unwrap();
        let config = AcoConfig::default()
            .with_num_ants(1)
            .with_max_iterations(1)
            .with_rho(0.0)
            .with_q(3.0)
            .with_seed(5);
        let result = AcoRunner::run(&distances, &config).unwrap();

        let tour = &result.best_tour;
        let amount = 3.0 / result.best_score;
        let mut expected = PheromoneMatrix::initialize(4);
        for k in 0..4 {
            expected.deposit(tour[k], tour[(k + 1) % 4], amount);
        }
        for (a, b) in result.pheromone.as_slice().iter().zip(expected.as_slice()) {
            assert!((a - b).abs() < 1e-12);
        }
        let total_added: f64 = result.pheromone.as_slice().iter().sum::<f64>() - 16.0;
        assert!((total_added - 4.0 * amount).abs() < 1e-12);
    }

    #[test]
    fn test_history_length_and_monotone() {
        let cities = generate_cities(25, CityLayout::default(), &mut create_rng(3)).unwrap();
        let config = AcoConfig::default()
            .with_num_ants(10)
            .with_max_iterations(40)
            .with_seed(3);
        let result = AcoRunner::solve(&cities, &config).unwrap();

        assert_eq!(result.iterations, 40);
        assert_eq!(result.score_history.len(), 40);
        assert_eq!(result.iteration_best_history.len(), 40);
        assert!(!result.stagnated);
        for w in result.score_history.windows(2) {
            assert!(w[1] <= w[0], "best score regressed: {} > {}", w[1], w[0]);
        }
        for (best, iter_best) in result
            .score_history
            .iter()
            .zip(&result.iteration_best_history)
        {
            assert!(best <= iter_best);
        }
        assert_eq!(result.score_history.last(), Some(&result.best_score));
        assert!(is_permutation(&result.best_tour, 25));
        let distances = DistanceMatrix::from_cities(&cities).unwrap();
        assert!((score_tour(&result.best_tour, &distances) - result.best_score).abs() < 1e-9);
    }

    #[test]
    fn test_circle_reaches_near_optimum() {
        let n = 20;
        let cities = generate_cities(n, CityLayout::Circle { radius: 10.0 }, &mut create_rng(0))
            .unwrap();
        let optimum = 2.0 * n as f64 * 10.0 * (std::f64::consts::PI / n as f64).sin();
        let config = AcoConfig::default()
            .with_num_ants(20)
            .with_max_iterations(100)
            .with_seed(42);
        let result = AcoRunner::solve(&cities, &config).unwrap();
        assert!(
            result.best_score <= optimum * 1.05,
            "expected near {optimum}, got {}",
            result.best_score
        );
    }

    #[test]
    fn test_same_seed_same_result() {
        let cities = generate_cities(15, CityLayout::default(), &mut create_rng(8)).unwrap();
        let config = AcoConfig::default()
            .with_max_iterations(15)
            .with_seed(99);
        let a = AcoRunner::solve(&cities, &config).unwrap();
        let b = AcoRunner::solve(&cities, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_rejected_before_search() {
        let distances = DistanceMatrix::from_cities(&unit_square()).unwrap();
        let config = AcoConfig::default().with_rho(1.0);
        let err = AcoRunner::run(&distances, &config).unwrap_err();
        assert!(matches!(err, AcoError::InvalidArgument { name: "rho", .. }));
    }

    #[test]
    fn test_solve_rejects_single_city() {
        let config = AcoConfig::default();
        assert!(AcoRunner::solve(&[City::new(0, 0.0, 0.0)], &config).is_err());
    }

    #[test]
    fn test_stagnation_stops_early() {
        // two cities have a single tour, so nothing improves after generation 1
        let cities = [City::new(0, 0.0, 0.0), City::new(1, 1.0, 0.0)];
        let config = AcoConfig::default()
            .with_max_iterations(100)
            .with_stagnation_limit(5)
            .with_seed(1);
        let result = AcoRunner::solve(&cities, &config).unwrap();
        assert!(result.stagnated);
        assert_eq!(result.iterations, 6);
        assert_eq!(result.score_history.len(), 6);
        assert!((result.best_score - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cancellation() {
        let distances = DistanceMatrix::from_cities(&unit_square()).unwrap();
        let config = AcoConfig::default().with_seed(1);

        // set before running so cancellation is deterministic
        let cancel = Arc::new(AtomicBool::new(true));
        let result = AcoRunner::run_with_cancel(&distances, &config, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert!(result.best_tour.is_empty());
        assert!(result.score_history.is_empty());
        assert_eq!(result.pheromone, PheromoneMatrix::initialize(4));
    }

    #[test]
    fn test_pheromone_stays_non_negative() {
        let cities = generate_cities(10, CityLayout::default(), &mut create_rng(6)).unwrap();
        let config = AcoConfig::default()
            .with_max_iterations(30)
            .with_rho(0.9)
            .with_seed(6);
        let result = AcoRunner::solve(&cities, &config).unwrap();
        assert!(result.pheromone.as_slice().iter().all(|&v| v >= 0.0));
    }
}
