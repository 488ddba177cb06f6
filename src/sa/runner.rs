//! SA execution loop.

use rand::Rng;

use super::config::SaConfig;
use crate::objective::objective;
use crate::ops::neighborhood::random_neighbor;
use crate::problem::{Instance, State};
use crate::random::create_rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best state encountered, which accepting worse moves never
    /// regresses.
    pub best: State,

    /// Objective score of the best state.
    pub best_score: f64,

    /// Current score after each iteration's accept/reject decision,
    /// starting from the initial state. Length is `iterations + 1`.
    pub score_history: Vec<f64>,

    /// Acceptance probability used at each iteration: `1.0` for
    /// unconditional (improving) accepts, `exp(-delta / T)` otherwise.
    pub probability_history: Vec<f64>,

    /// Number of rejected moves.
    pub stuck_count: usize,

    /// Total iterations executed.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,
}

/// Executes Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from the given initial state.
    ///
    /// Per iteration: sample one random neighbor, accept it outright when
    /// it improves (updating the remembered best), otherwise accept with
    /// the Metropolis probability; then cool geometrically. Stops when the
    /// temperature falls to `min_temperature` or the iteration cap is hit.
    ///
    /// With `config.reheat` set, `threshold` consecutive non-improving
    /// iterations multiply the temperature by `factor` (capped at the
    /// initial temperature).
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run(instance: &Instance, initial: &State, config: &SaConfig) -> SaResult {
        config.validate().expect("invalid SaConfig");
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut current = initial.clone();
        let mut current_score = objective(instance, &current);
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut temperature = config.initial_temperature;
        let mut score_history = vec![current_score];
        let mut probability_history = Vec::new();
        let mut stuck_count = 0;
        let mut no_improvement = 0usize;
        let mut iteration = 0;

        while temperature > config.min_temperature && iteration < config.max_iterations {
            let neighbor = random_neighbor(instance, &current, &mut rng);
            let neighbor_score = objective(instance, &neighbor);
            let delta = neighbor_score - current_score;

            if delta < 0.0 {
                // Improving move: always accept.
                current = neighbor;
                current_score = neighbor_score;
                no_improvement = 0;
                probability_history.push(1.0);

                if current_score < best_score {
                    best = current.clone();
                    best_score = current_score;
                }
            } else {
                // Worsening (or equal) move: Metropolis criterion.
                let probability = (-delta / temperature).exp();
                probability_history.push(probability);

                if rng.random_range(0.0..1.0) < probability {
                    current = neighbor;
                    current_score = neighbor_score;
                } else {
                    stuck_count += 1;
                }
                no_improvement += 1;
            }

            if let Some(reheat) = config.reheat {
                if no_improvement >= reheat.threshold {
                    temperature = (temperature * reheat.factor).min(config.initial_temperature);
                    no_improvement = 0;
                }
            }

            score_history.push(current_score);
            temperature *= config.alpha;
            iteration += 1;
        }

        SaResult {
            best,
            best_score,
            score_history,
            probability_history,
            stuck_count,
            iterations: iteration,
            final_temperature: temperature,
        }
    }
}
