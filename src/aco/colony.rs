//! One generation of the colony.
//!
//! Every ant builds a tour against the same read-only pheromone state.
//! Deposits from all ants are staged in a private buffer, merged with a
//! single addition, and only then is the matrix evaporated once.

use super::config::AcoConfig;
use super::construct::TourConstructor;
use super::heuristic::{HeuristicMatrix, COINCIDENT_HEURISTIC};
use super::pheromone::PheromoneMatrix;
use crate::random::create_rng;
use crate::tsp::{score_tour, DistanceMatrix};
use rand::Rng;

/// Best-so-far search state, owned by the runner.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Best tour found so far. Empty until the first generation.
    pub best_tour: Vec<usize>,

    /// Length of `best_tour`; infinite until the first generation.
    pub best_score: f64,

    /// `best_score` recorded after each generation.
    pub score_history: Vec<f64>,

    /// Number of completed generations.
    pub generation: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            best_tour: Vec::new(),
            best_score: f64::INFINITY,
            score_history: Vec::new(),
            generation: 0,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the best tour if `score` is strictly lower.
    pub fn offer(&mut self, tour: &[usize], score: f64) -> bool {
        if score < self.best_score {
            self.best_tour.clear();
            self.best_tour.extend_from_slice(tour);
            self.best_score = score;
            true
        } else {
            false
        }
    }
}

/// Outcome of a single generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSummary {
    /// Shortest tour built during this generation.
    pub iteration_best: f64,

    /// Whether the global best improved.
    pub improved: bool,
}

/// Shared, read-only problem data for a run.
#[derive(Debug, Clone, Copy)]
pub struct ColonyContext<'a> {
    pub distances: &'a DistanceMatrix,
    pub heuristic: &'a HeuristicMatrix,
    pub config: &'a AcoConfig,
}

struct AntTour {
    tour: Vec<usize>,
    score: f64,
}

/// Runs one generation: construct, score, track best, deposit, evaporate.
///
/// Each ant draws its own seed from `rng` in ant order and uses a
/// private generator for its start city and selection draws, so
/// sequential and parallel construction give the same result.
pub fn run_generation<R: Rng + ?Sized>(
    ctx: &ColonyContext<'_>,
    pheromone: &mut PheromoneMatrix,
    state: &mut SearchState,
    rng: &mut R,
) -> GenerationSummary {
    let n = ctx.distances.len();
    let config = ctx.config;
    let seeds: Vec<u64> = (0..config.num_ants).map(|_| rng.random()).collect();

    let ants = {
        let builder = TourConstructor::new(pheromone, ctx.heuristic, config.beta, config.q0);
        build_tours(&builder, ctx.distances, &seeds, config.parallel)
    };

    let mut iteration_best = f64::INFINITY;
    let mut improved = false;
    for ant in &ants {
        iteration_best = iteration_best.min(ant.score);
        improved |= state.offer(&ant.tour, ant.score);
    }

    let mut staged = PheromoneMatrix::zeros(n);
    for ant in &ants {
        staged.deposit_tour(&ant.tour, deposit_amount(config.q, ant.score));
    }
    pheromone.merge(&staged);
    pheromone.evaporate(config.rho);

    GenerationSummary {
        iteration_best,
        improved,
    }
}

/// `q / score`, with zero-length tours (all cities coincident) scored
/// like coincident edges in the heuristic.
fn deposit_amount(q: f64, score: f64) -> f64 {
    if score > 0.0 {
        q / score
    } else {
        q * COINCIDENT_HEURISTIC
    }
}

fn walk(builder: &TourConstructor<'_>, distances: &DistanceMatrix, seed: u64) -> AntTour {
    let mut rng = create_rng(seed);
    let start = rng.random_range(0..distances.len());
    let tour = builder.construct(start, &mut rng);
    let score = score_tour(&tour, distances);
    AntTour { tour, score }
}

#[cfg(feature = "parallel")]
fn build_tours(
    builder: &TourConstructor<'_>,
    distances: &DistanceMatrix,
    seeds: &[u64],
    parallel: bool,
) -> Vec<AntTour> {
    use rayon::prelude::*;

    if parallel {
        seeds
            .par_iter()
            .map(|&seed| walk(builder, distances, seed))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| walk(builder, distances, seed))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn build_tours(
    builder: &TourConstructor<'_>,
    distances: &DistanceMatrix,
    seeds: &[u64],
    _parallel: bool,
) -> Vec<AntTour> {
    seeds
        .iter()
        .map(|&seed| walk(builder, distances, seed))
        .collect()
}
