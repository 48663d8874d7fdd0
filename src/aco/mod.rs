//! Ant Colony Optimization (ACO) for the symmetric Euclidean TSP.
//!
//! A colony of ants builds tours city by city. Each step weighs every
//! unvisited city by learned pheromone `tau` times the inverse-distance
//! heuristic `eta^beta`, then either takes the heaviest edge
//! (exploitation, probability `q0`) or samples in proportion to weight
//! (exploration). After each generation every ant deposits `q / length`
//! on the directed edges it walked and the whole matrix evaporates by
//! `rho`.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Colony parameters, validation and presets
//! - [`AcoRunner`]: Drives generations and returns an [`AcoResult`]
//! - [`TourConstructor`]: Pseudo-random-proportional tour building
//! - [`PheromoneMatrix`] / [`HeuristicMatrix`]: The two edge matrices
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative
//!   Learning Approach to the Traveling Salesman Problem"

mod colony;
mod config;
mod construct;
mod heuristic;
mod pheromone;
mod runner;

pub use colony::{run_generation, ColonyContext, GenerationSummary, SearchState};
pub use config::AcoConfig;
pub use construct::TourConstructor;
pub use heuristic::{HeuristicMatrix, COINCIDENT_HEURISTIC};
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
