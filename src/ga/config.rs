//! GA configuration.

use super::selection::Selection;

/// Configuration for the Genetic Algorithm.
///
/// # Examples
///
/// ```
/// use packopt::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_selection(Selection::Tournament(5))
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Probability of recombining a parent pair (0.0–1.0). When crossover
    /// is skipped, the parents pass through as clones.
    pub crossover_rate: f64,

    /// Probability of mutating each offspring (0.0–1.0), applied
    /// independently per child.
    pub mutation_rate: f64,

    /// Number of lowest-objective individuals copied unchanged into the
    /// next generation.
    pub elitism: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            elitism: 2,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of elites.
    pub fn with_elitism(mut self, n: usize) -> Self {
        self.elitism = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Convenience builder for tournament selection of size `k`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.elitism >= self.population_size {
            return Err("elitism must be less than population_size".into());
        }
        if let Selection::Tournament(k) = self.selection {
            if k == 0 {
                return Err("tournament size must be at least 1".into());
            }
        }
        Ok(())
    }
}
