//! City coordinates and layout generation.

use crate::error::{AcoError, Result};
use rand::Rng;

/// A city on the plane.
///
/// `id` is the city's index into every matrix built from the city set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// How generated cities are placed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CityLayout {
    /// Uniform placement in `[0, width) x [0, height)`.
    Random {
        /// Horizontal extent of the region.
        width: f64,
        /// Vertical extent of the region.
        height: f64,
    },

    /// Evenly spaced on a circle centred at `(radius, radius)`.
    ///
    /// The optimal tour is the polygon perimeter, which makes this
    /// layout handy for checking solution quality.
    Circle {
        /// Circle radius.
        radius: f64,
    },

    /// Row-major on a square grid `ceil(sqrt(n))` cities wide.
    Grid {
        /// Distance between neighbouring grid points.
        spacing: f64,
    },
}

impl Default for CityLayout {
    fn default() -> Self {
        CityLayout::Random {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl CityLayout {
    fn validate(&self) -> Result<()> {
        let positive = |name: &'static str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(AcoError::invalid(
                    name,
                    format!("must be positive and finite, got {v}"),
                ))
            }
        };
        match *self {
            CityLayout::Random { width, height } => {
                positive("width", width)?;
                positive("height", height)
            }
            CityLayout::Circle { radius } => positive("radius", radius),
            CityLayout::Grid { spacing } => positive("spacing", spacing),
        }
    }
}

/// Generates `n` cities with the given layout.
///
/// Only [`CityLayout::Random`] consumes randomness; the other layouts
/// are deterministic and leave `rng` untouched.
///
/// # Errors
///
/// Returns [`AcoError::InvalidArgument`] if `n < 2` or the layout has a
/// non-positive dimension.
///
/// # Examples
///
/// ```
/// use u_aco::random::create_rng;
/// use u_aco::tsp::{generate_cities, CityLayout};
///
/// let mut rng = create_rng(42);
/// let cities = generate_cities(10, CityLayout::default(), &mut rng).unwrap();
/// assert_eq!(cities.len(), 10);
/// assert!(cities.iter().all(|c| (0.0..1.0).contains(&c.x)));
/// ```
pub fn generate_cities<R: Rng>(n: usize, layout: CityLayout, rng: &mut R) -> Result<Vec<City>> {
    if n < 2 {
        return Err(AcoError::invalid(
            "num_cities",
            format!("at least 2 cities are required, got {n}"),
        ));
    }
    layout.validate()?;

    let cities = match layout {
        CityLayout::Random { width, height } => (0..n)
            .map(|id| {
                City::new(
                    id,
                    rng.random_range(0.0..width),
                    rng.random_range(0.0..height),
                )
            })
            .collect(),

        CityLayout::Circle { radius } => (0..n)
            .map(|id| {
                let theta = std::f64::consts::TAU * id as f64 / n as f64;
                City::new(
                    id,
                    radius + radius * theta.cos(),
                    radius + radius * theta.sin(),
                )
            })
            .collect(),

        CityLayout::Grid { spacing } => {
            let cols = (n as f64).sqrt().ceil() as usize;
            (0..n)
                .map(|id| {
                    City::new(
                        id,
                        (id % cols) as f64 * spacing,
                        (id / cols) as f64 * spacing,
                    )
                })
                .collect()
        }
    };

    Ok(cities)
}
