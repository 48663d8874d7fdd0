//! Learned edge desirability (tau).

/// Directed pheromone matrix.
///
/// Entries are addressed as `(from, to)`. Deposits only touch the
/// traversed direction; the reverse entry is left alone even though the
/// underlying distances are symmetric.
///
/// Within one generation every deposit must land before the single
/// [`evaporate`](Self::evaporate) call. Deposits are additive, so their
/// order does not matter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// Initial level of every entry.
    pub const INITIAL: f64 = 1.0;

    /// Creates an `n x n` matrix with every entry at [`Self::INITIAL`].
    pub fn initialize(n: usize) -> Self {
        Self {
            n,
            data: vec![Self::INITIAL; n * n],
        }
    }

    /// Creates an `n x n` matrix of zeros, used as a staging buffer.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
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

    /// `tau(from, to)`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    /// Adds `amount` to `tau(from, to)`.
    #[inline]
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.data[from * self.n + to] += amount;
    }

    /// Deposits `amount` on each of the tour's directed edges, closing
    /// edge included.
    pub fn deposit_tour(&mut self, tour: &[usize], amount: f64) {
        let len = tour.len();
        for (k, &from) in tour.iter().enumerate() {
            self.deposit(from, tour[(k + 1) % len], amount);
        }
    }

    /// Multiplies every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Adds a staged buffer of deposits into this matrix.
    ///
    /// # Panics
    ///
    /// Panics if the two matrices differ in size.
    pub fn merge(&mut self, staged: &PheromoneMatrix) {
        assert_eq!(self.n, staged.n, "pheromone buffers must have equal size");
        for (tau, add) in self.data.iter_mut().zip(&staged.data) {
            *tau += add;
        }
    }

    /// Row-major view of all entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
