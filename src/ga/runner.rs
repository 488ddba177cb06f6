//! GA evolutionary loop.

use std::cmp::Ordering;

use rand::Rng;

use super::config::GaConfig;
use super::operators;
use crate::objective::{fitness, objective};
use crate::ops::init;
use crate::problem::{Instance, State};
use crate::random::create_rng;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The lowest-objective individual in the final population.
    pub best: State,

    /// Objective score of the best individual.
    pub best_score: f64,

    /// Lowest objective in the population at each generation.
    pub best_history: Vec<f64>,

    /// Mean objective over the population at each generation.
    pub avg_history: Vec<f64>,

    /// Number of generations executed.
    pub generations: usize,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use packopt::ga::{GaConfig, GaRunner};
/// use packopt::problem::{Instance, Item};
///
/// let instance = Instance::new(10, vec![Item::new("A", 4), Item::new("B", 6)]);
/// let config = GaConfig::default().with_generations(10).with_seed(42);
/// let result = GaRunner::run(&instance, &config);
/// assert!(result.best.is_valid(&instance));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA: evaluate, preserve elites, then fill the next
    /// generation by selection → crossover → mutation until
    /// `config.generations` generations have passed.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run(instance: &Instance, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population: Vec<State> = (0..config.population_size)
            .map(|_| init::random(instance, &mut rng))
            .collect();

        let mut best_history = Vec::with_capacity(config.generations);
        let mut avg_history = Vec::with_capacity(config.generations);

        for _ in 0..config.generations {
            let objective_scores: Vec<f64> = population
                .iter()
                .map(|individual| objective(instance, individual))
                .collect();
            let fitness_scores: Vec<f64> = population
                .iter()
                .map(|individual| fitness(instance, individual))
                .collect();

            let generation_best = objective_scores.iter().copied().fold(f64::MAX, f64::min);
            let generation_avg =
                objective_scores.iter().sum::<f64>() / objective_scores.len() as f64;
            best_history.push(generation_best);
            avg_history.push(generation_avg);

            let mut next_generation: Vec<State> = Vec::with_capacity(config.population_size);

            // Elitism: the lowest-objective individuals survive unchanged.
            if config.elitism > 0 {
                let mut order: Vec<usize> = (0..population.len()).collect();
                order.sort_by(|&a, &b| {
                    objective_scores[a]
                        .partial_cmp(&objective_scores[b])
                        .unwrap_or(Ordering::Equal)
                });
                for &idx in order.iter().take(config.elitism) {
                    next_generation.push(population[idx].clone());
                }
            }

            // Offspring.
            while next_generation.len() < config.population_size {
                let parent1 = &population[config.selection.select(&fitness_scores, &mut rng)];
                let parent2 = &population[config.selection.select(&fitness_scores, &mut rng)];

                let (mut child1, mut child2) =
                    if rng.random_range(0.0..1.0) < config.crossover_rate {
                        operators::crossover(instance, parent1, parent2, &mut rng)
                    } else {
                        (parent1.clone(), parent2.clone())
                    };

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    child1 = operators::mutate(instance, &child1, &mut rng);
                }
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    child2 = operators::mutate(instance, &child2, &mut rng);
                }

                next_generation.push(child1);
                if next_generation.len() < config.population_size {
                    next_generation.push(child2);
                }
            }

            next_generation.truncate(config.population_size);
            population = next_generation;
        }

        // Lowest objective in the final population wins.
        let final_scores: Vec<f64> = population
            .iter()
            .map(|individual| objective(instance, individual))
            .collect();
        let best_idx = final_scores
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(idx, _)| idx)
            .expect("population is never empty");

        GaResult {
            best_score: final_scores[best_idx],
            best: population.swap_remove(best_idx),
            best_history,
            avg_history,
            generations: config.generations,
        }
    }
}
