//! Ant Colony Optimization for the Euclidean Traveling Salesman Problem.
//!
//! - **Ant colony search** ([`aco`]): tour construction with the
//!   pseudo-random-proportional rule over pheromone and inverse-distance
//!   heuristics, additive pheromone deposits and per-generation
//!   evaporation, and a fixed-budget optimization loop with optional
//!   stagnation stopping and cancellation.
//! - **TSP instances** ([`tsp`]): city generation, the symmetric
//!   distance matrix, and closed-tour scoring.
//!
//! # Quick start
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner};
//! use u_aco::random::create_rng;
//! use u_aco::tsp::{generate_cities, CityLayout};
//!
//! let cities = generate_cities(30, CityLayout::default(), &mut create_rng(7))?;
//! let result = AcoRunner::solve(&cities, &AcoConfig::fast().with_seed(7))?;
//! println!("best length {:.4} after {} generations", result.best_score, result.iterations);
//! # Ok::<(), u_aco::AcoError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: construct each generation's tours on the rayon pool.
//! - `serde`: `Serialize`/`Deserialize` for cities, configuration and results.
//!
//! Logging goes through `tracing`; install a subscriber to see it.

pub mod aco;
mod error;
pub mod random;
pub mod tsp;

pub use error::{AcoError, Result};
