//! Hill climbing execution loops.

use rand::Rng;

use super::config::HcConfig;
use crate::objective::objective;
use crate::ops::{init, neighborhood};
use crate::problem::{Instance, State};
use crate::random::create_rng;

/// Result of a single hill climbing run.
#[derive(Debug, Clone)]
pub struct HcResult {
    /// The final state reached.
    pub best: State,

    /// Objective score of the final state.
    pub best_score: f64,

    /// Objective score at each step, starting from the initial state. On
    /// termination without improvement the final score appears once more.
    pub score_history: Vec<f64>,

    /// Number of accepted moves.
    pub iterations: usize,
}

/// Result of a random-restart run.
#[derive(Debug, Clone)]
pub struct RestartResult {
    /// The best state across all restarts.
    pub best: State,

    /// Objective score of the best state.
    pub best_score: f64,

    /// Concatenation of all per-restart score histories.
    pub score_history: Vec<f64>,

    /// Total accepted moves across all restarts.
    pub iterations: usize,

    /// Accepted moves in each individual restart.
    pub iterations_per_restart: Vec<usize>,
}

/// Executes the hill climbing variants.
pub struct HcRunner;

impl HcRunner {
    /// Steepest ascent: each iteration evaluates the full neighborhood and
    /// moves to the strictly best neighbor, terminating when none improves.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn steepest_ascent(instance: &Instance, initial: &State, config: &HcConfig) -> HcResult {
        config.validate().expect("invalid HcConfig");

        let mut current = initial.clone();
        let mut current_score = objective(instance, &current);
        let mut score_history = vec![current_score];
        let mut iteration = 0;

        while iteration < config.max_iterations {
            let candidates = neighborhood::neighbors(instance, &current);
            if candidates.is_empty() {
                score_history.push(current_score);
                break;
            }

            match best_neighbor(instance, candidates, current_score) {
                Some((neighbor, score)) => {
                    current = neighbor;
                    current_score = score;
                    score_history.push(current_score);
                    iteration += 1;
                }
                None => {
                    score_history.push(current_score);
                    break;
                }
            }
        }

        HcResult {
            best: current,
            best_score: current_score,
            score_history,
            iterations: iteration,
        }
    }

    /// Stochastic hill climbing: each iteration collects all strictly
    /// improving neighbors and moves to one chosen uniformly at random.
    pub fn stochastic(instance: &Instance, initial: &State, config: &HcConfig) -> HcResult {
        config.validate().expect("invalid HcConfig");
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut current = initial.clone();
        let mut current_score = objective(instance, &current);
        let mut score_history = vec![current_score];
        let mut iteration = 0;

        while iteration < config.max_iterations {
            let candidates = neighborhood::neighbors(instance, &current);
            if candidates.is_empty() {
                score_history.push(current_score);
                break;
            }

            let mut improving: Vec<(State, f64)> = candidates
                .into_iter()
                .filter_map(|neighbor| {
                    let score = objective(instance, &neighbor);
                    if score < current_score {
                        Some((neighbor, score))
                    } else {
                        None
                    }
                })
                .collect();

            if improving.is_empty() {
                score_history.push(current_score);
                break;
            }

            let pick = rng.random_range(0..improving.len());
            let (neighbor, score) = improving.swap_remove(pick);
            current = neighbor;
            current_score = score;
            score_history.push(current_score);
            iteration += 1;
        }

        HcResult {
            best: current,
            best_score: current_score,
            score_history,
            iterations: iteration,
        }
    }

    /// Sideways-move hill climbing: steepest ascent that, on a plateau,
    /// steps to a random equal-score neighbor. At most
    /// `config.max_sideways` consecutive sideways moves are taken; a strict
    /// improvement resets the counter.
    pub fn sideways(instance: &Instance, initial: &State, config: &HcConfig) -> HcResult {
        config.validate().expect("invalid HcConfig");
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut current = initial.clone();
        let mut current_score = objective(instance, &current);
        let mut score_history = vec![current_score];
        let mut iteration = 0;
        let mut sideways_count = 0;

        while iteration < config.max_iterations && sideways_count < config.max_sideways {
            let candidates = neighborhood::neighbors(instance, &current);
            if candidates.is_empty() {
                score_history.push(current_score);
                break;
            }

            let mut scored: Vec<(State, f64)> = candidates
                .into_iter()
                .map(|neighbor| {
                    let score = objective(instance, &neighbor);
                    (neighbor, score)
                })
                .collect();

            let mut best_idx = None;
            let mut best_score = current_score;
            for (idx, (_, score)) in scored.iter().enumerate() {
                if *score < best_score {
                    best_score = *score;
                    best_idx = Some(idx);
                }
            }

            let pick = match best_idx {
                Some(idx) => {
                    sideways_count = 0;
                    idx
                }
                None => {
                    let plateau: Vec<usize> = scored
                        .iter()
                        .enumerate()
                        .filter(|(_, (_, score))| *score == current_score)
                        .map(|(idx, _)| idx)
                        .collect();
                    if plateau.is_empty() {
                        score_history.push(current_score);
                        break;
                    }
                    sideways_count += 1;
                    plateau[rng.random_range(0..plateau.len())]
                }
            };

            let (neighbor, score) = scored.swap_remove(pick);
            current = neighbor;
            current_score = score;
            score_history.push(current_score);
            iteration += 1;
        }

        HcResult {
            best: current,
            best_score: current_score,
            score_history,
            iterations: iteration,
        }
    }

    /// Random-restart hill climbing: `config.max_restarts` steepest-ascent
    /// climbs from fresh random initial states, each capped at
    /// `config.max_iterations_per_restart` iterations. Returns the global
    /// best with all restart histories concatenated.
    pub fn random_restart(instance: &Instance, config: &HcConfig) -> RestartResult {
        config.validate().expect("invalid HcConfig");
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let climb_config = HcConfig {
            max_iterations: config.max_iterations_per_restart,
            ..config.clone()
        };

        let mut best: Option<State> = None;
        let mut best_score = f64::MAX;
        let mut score_history = Vec::new();
        let mut iterations = 0;
        let mut iterations_per_restart = Vec::with_capacity(config.max_restarts);

        for _ in 0..config.max_restarts {
            let initial = init::random(instance, &mut rng);
            let result = Self::steepest_ascent(instance, &initial, &climb_config);

            iterations_per_restart.push(result.iterations);
            iterations += result.iterations;
            score_history.extend(result.score_history);

            if best.is_none() || result.best_score < best_score {
                best_score = result.best_score;
                best = Some(result.best);
            }
        }

        RestartResult {
            best: best.expect("max_restarts is at least 1"),
            best_score,
            score_history,
            iterations,
            iterations_per_restart,
        }
    }
}

/// Picks the strictly best neighbor, or `None` when nothing improves on
/// `current_score`. Ties keep the earliest candidate.
fn best_neighbor(
    instance: &Instance,
    candidates: Vec<State>,
    current_score: f64,
) -> Option<(State, f64)> {
    let mut best: Option<(State, f64)> = None;
    let mut best_score = current_score;
    for neighbor in candidates {
        let score = objective(instance, &neighbor);
        if score < best_score {
            best_score = score;
            best = Some((neighbor, score));
        }
    }
    best
}
