//! Euclidean TSP instances.
//!
//! The collaborators the colony needs: city generation, the pairwise
//! distance matrix, and closed-tour scoring.

mod city;
mod distance;

pub use city::{generate_cities, City, CityLayout};
pub use distance::{euclidean, score_tour, DistanceMatrix};
