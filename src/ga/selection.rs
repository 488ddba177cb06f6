//! Parent selection strategies.
//!
//! Selection operates on the population's fitness values (inverse
//! objective — **higher is better**) and returns the index of the chosen
//! parent.

use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use packopt::ga::Selection;
///
/// // Tournament of size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Fitness-proportionate
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Tournament selection: sample `k` distinct individuals uniformly
    /// without replacement and keep the fittest. Higher `k` = stronger
    /// selection pressure. `k` is clamped to the population size.
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection. Falls back to a
    /// uniform pick when the total fitness is zero.
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects a parent index from the population's fitness values.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> usize {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match *self {
            Selection::Tournament(k) => tournament(fitness, k, rng),
            Selection::Roulette => roulette(fitness, rng),
        }
    }
}

/// Tournament without replacement: the fittest of `k` distinct contenders
/// wins; ties keep the contender drawn first.
fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    let k = k.clamp(1, fitness.len());
    let contenders = rand::seq::index::sample(rng, fitness.len(), k);

    let mut winner = None;
    for idx in contenders {
        match winner {
            None => winner = Some(idx),
            Some(best) if fitness[idx] > fitness[best] => winner = Some(idx),
            Some(_) => {}
        }
    }
    winner.expect("tournament has at least one contender")
}

/// Roulette wheel: selection probability proportional to fitness.
fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let total: f64 = fitness.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..fitness.len());
    }

    let pick = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (idx, &f) in fitness.iter().enumerate() {
        cumulative += f;
        if cumulative >= pick {
            return idx;
        }
    }

    fitness.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_tournament_favors_fittest() {
        let fitness = [0.1, 0.5, 2.0, 0.8];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[Selection::Tournament(3).select(&fitness, &mut rng)] += 1;
        }
        let best = counts[2];
        assert!(
            best > 6000,
            "expected fittest to win >60% of tournaments, got {best}/{n}"
        );
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        let fitness = [0.1, 0.5, 2.0, 0.8];
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(Selection::Tournament(4).select(&fitness, &mut rng), 2);
        }
    }

    #[test]
    fn test_tournament_size_clamped_to_population() {
        let fitness = [0.5, 1.0];
        let mut rng = create_rng(42);
        // Oversized tournaments degrade to the full population.
        assert_eq!(Selection::Tournament(10).select(&fitness, &mut rng), 1);
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let fitness = [0.1, 0.5, 2.0, 0.8];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[Selection::Tournament(1).select(&fitness, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_fittest() {
        let fitness = [0.1, 0.5, 2.0, 0.8];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[Selection::Roulette.select(&fitness, &mut rng)] += 1;
        }
        assert!(
            counts[2] > counts[0],
            "fittest should win more often: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_zero_fitness_is_uniform_fallback() {
        let fitness = [0.0, 0.0, 0.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 3];
        for _ in 0..9000 {
            counts[Selection::Roulette.select(&fitness, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform fallback, got {counts:?}");
        }
    }

    #[test]
    fn test_single_individual() {
        let fitness = [0.5];
        let mut rng = create_rng(42);
        assert_eq!(Selection::Tournament(3).select(&fitness, &mut rng), 0);
        assert_eq!(Selection::Roulette.select(&fitness, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let fitness: [f64; 0] = [];
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&fitness, &mut rng);
    }
}
