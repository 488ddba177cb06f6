//! Hill climbing configuration.

/// Configuration shared by the four hill climbing variants.
///
/// # Examples
///
/// ```
/// use packopt::hc::HcConfig;
///
/// let config = HcConfig::default()
///     .with_max_iterations(500)
///     .with_max_sideways(50)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct HcConfig {
    /// Iteration cap for a single climb.
    pub max_iterations: usize,

    /// Maximum consecutive equal-score moves before the sideways variant
    /// gives up. A strict improvement resets the counter.
    pub max_sideways: usize,

    /// Number of climbs for the random-restart variant.
    pub max_restarts: usize,

    /// Iteration cap for each individual restart.
    pub max_iterations_per_restart: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            max_sideways: 100,
            max_restarts: 10,
            max_iterations_per_restart: 100,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the sideways-move budget.
    pub fn with_max_sideways(mut self, n: usize) -> Self {
        self.max_sideways = n;
        self
    }

    /// Sets the number of restarts.
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    /// Sets the per-restart iteration cap.
    pub fn with_max_iterations_per_restart(mut self, n: usize) -> Self {
        self.max_iterations_per_restart = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.max_restarts == 0 {
            return Err("max_restarts must be at least 1".into());
        }
        if self.max_iterations_per_restart == 0 {
            return Err("max_iterations_per_restart must be at least 1".into());
        }
        Ok(())
    }
}
