//! SA configuration.

/// Reheating schedule: after `threshold` consecutive non-improving
/// iterations the temperature is multiplied by `factor` (capped at the
/// initial temperature) and the counter resets.
///
/// Gives the search a chance to escape a plateau after the geometric
/// schedule has driven the temperature too low to accept worsening moves.
#[derive(Debug, Clone, Copy)]
pub struct Reheat {
    /// Non-improving iterations before a reheat fires.
    pub threshold: usize,

    /// Temperature multiplier, greater than 1.
    pub factor: f64,
}

impl Default for Reheat {
    fn default() -> Self {
        Self {
            threshold: 50,
            factor: 2.0,
        }
    }
}

/// Configuration for Simulated Annealing.
///
/// # Examples
///
/// ```
/// use packopt::sa::{Reheat, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_alpha(0.98)
///     .with_reheat(Reheat::default())
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The search stops when T drops to or below it.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,

    /// Hard iteration cap.
    pub max_iterations: usize,

    /// Optional reheating schedule. `None` disables reheating.
    pub reheat: Option<Reheat>,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.1,
            alpha: 0.95,
            max_iterations: 1000,
            reheat: None,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the minimum temperature.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Enables reheating with the given schedule.
    pub fn with_reheat(mut self, reheat: Reheat) -> Self {
        self.reheat = Some(reheat);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if let Some(reheat) = self.reheat {
            if reheat.threshold == 0 {
                return Err("reheat threshold must be at least 1".into());
            }
            if reheat.factor <= 1.0 {
                return Err(format!(
                    "reheat factor must be greater than 1, got {}",
                    reheat.factor
                ));
            }
        }
        Ok(())
    }
}
