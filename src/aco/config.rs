//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter of the colony search. Invalid
//! values are rejected by [`AcoConfig::validate`] before any work starts.

use crate::error::{AcoError, Result};

/// Configuration for the ant colony search.
///
/// # Defaults
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 20);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.stagnation_limit, 0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(40)
///     .with_beta(3.0)
///     .with_q0(0.8)
///     .with_rho(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants per generation. Must be at least 1.
    pub num_ants: usize,

    /// Number of generations to run. Must be at least 1.
    pub max_iterations: usize,

    /// Exponent on the heuristic `eta` in edge weights (>= 0).
    ///
    /// 0 ignores distances entirely; typical range 2–5.
    pub beta: f64,

    /// Probability of greedy (exploitation) selection at each step, in [0, 1].
    pub q0: f64,

    /// Deposit constant. Each tour deposits `q / length` per edge (> 0).
    pub q: f64,

    /// Evaporation rate in [0, 1). Every entry is scaled by `1 - rho`
    /// once per generation.
    pub rho: f64,

    /// Generations without strict improvement before stopping early.
    ///
    /// 0 disables early stopping (the default), so exactly
    /// `max_iterations` generations run.
    pub stagnation_limit: usize,

    /// Whether to construct tours in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are
    /// identical either way for a given seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            max_iterations: 200,
            beta: 2.0,
            q0: 0.9,
            q: 1.0,
            rho: 0.1,
            stagnation_limit: 0,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per generation.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_q0(mut self, q0: f64) -> Self {
        self.q0 = q0;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: 10 ants, 50 generations, stops after 15
    /// stagnant generations.
    pub fn fast() -> Self {
        Self {
            num_ants: 10,
            max_iterations: 50,
            stagnation_limit: 15,
            ..Self::default()
        }
    }

    /// Preset balancing quality and time: 20 ants, 200 generations,
    /// stops after 50 stagnant generations.
    pub fn balanced() -> Self {
        Self {
            num_ants: 20,
            max_iterations: 200,
            stagnation_limit: 50,
            ..Self::default()
        }
    }

    /// Preset for solution quality: 40 ants, 500 generations, stops
    /// after 100 stagnant generations.
    pub fn quality() -> Self {
        Self {
            num_ants: 40,
            max_iterations: 500,
            stagnation_limit: 100,
            beta: 3.0,
            ..Self::default()
        }
    }

    /// Selects a preset from the number of cities.
    ///
    /// - `num_cities < 30` → [`fast()`](Self::fast)
    /// - `30 ≤ num_cities < 150` → [`balanced()`](Self::balanced)
    /// - `num_cities ≥ 150` → [`quality()`](Self::quality)
    pub fn auto_select(num_cities: usize) -> Self {
        if num_cities < 30 {
            Self::fast()
        } else if num_cities < 150 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidArgument`] naming the first parameter
    /// found outside its domain.
    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(AcoError::invalid("num_ants", "must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(AcoError::invalid("max_iterations", "must be at least 1"));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(AcoError::invalid(
                "beta",
                format!("must be finite and non-negative, got {}", self.beta),
            ));
        }
        if !(0.0..=1.0).contains(&self.q0) {
            return Err(AcoError::invalid(
                "q0",
                format!("must be in [0, 1], got {}", self.q0),
            ));
        }
        if !(self.q.is_finite() && self.q > 0.0) {
            return Err(AcoError::invalid(
                "q",
                format!("must be finite and positive, got {}", self.q),
            ));
        }
        if !(0.0..1.0).contains(&self.rho) {
            return Err(AcoError::invalid(
                "rho",
                format!("must be in [0, 1), got {}", self.rho),
            ));
        }
        Ok(())
    }
}
