//! Initial-state constructors.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::problem::{Bin, Instance, State};

/// Below this item count, [`random_worst`] defers to [`worst`]; the pure
/// one-bin-per-item layout reads better on tiny instances.
pub const WORST_FALLBACK_THRESHOLD: usize = 15;

/// Probability that [`random_worst`] opens a fresh bin for an item instead
/// of trying an existing one. Empirical constant.
pub const NEW_BIN_PROBABILITY: f64 = 0.7;

/// Which initial-state constructor a driver should start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitStrategy {
    /// First-fit over a shuffled item order.
    #[default]
    Random,
    /// First-fit over the natural item order.
    FirstFit,
    /// Tightest-fitting bin over the natural item order.
    BestFit,
    /// One bin per item, shuffled.
    Worst,
    /// Mostly-fresh bins with occasional random insertion.
    RandomWorst,
}

impl InitStrategy {
    /// Builds an initial state with this strategy.
    pub fn build<R: Rng>(&self, instance: &Instance, rng: &mut R) -> State {
        match self {
            InitStrategy::Random => random(instance, rng),
            InitStrategy::FirstFit => first_fit(instance),
            InitStrategy::BestFit => best_fit(instance),
            InitStrategy::Worst => worst(instance, rng),
            InitStrategy::RandomWorst => random_worst(instance, rng),
        }
    }
}

/// First-fit placement over a shuffled item order.
pub fn random<R: Rng>(instance: &Instance, rng: &mut R) -> State {
    let mut ids = instance.item_ids();
    ids.shuffle(rng);
    first_fit_order(instance, ids)
}

/// First-fit placement over the items' natural order.
pub fn first_fit(instance: &Instance) -> State {
    first_fit_order(instance, instance.item_ids())
}

/// Best-fit placement over the items' natural order: each item goes into
/// the existing bin leaving the least capacity behind, or a new bin when
/// none fits.
pub fn best_fit(instance: &Instance) -> State {
    let mut state = State::new();
    for item in instance.items() {
        let mut best: Option<(usize, u64)> = None;
        for (idx, bin) in state.bins.iter().enumerate() {
            if bin.can_fit(instance, &item.id) {
                let leftover = instance.capacity() - bin.total_size(instance) - item.size;
                if best.is_none_or(|(_, current)| leftover < current) {
                    best = Some((idx, leftover));
                }
            }
        }
        match best {
            Some((idx, _)) => state.bins[idx].push(item.id.clone()),
            None => state.bins.push(Bin::with_item(item.id.clone())),
        }
    }
    state
}

/// Every item in its own bin, shuffled. Maximizes the starting bin count.
pub fn worst<R: Rng>(instance: &Instance, rng: &mut R) -> State {
    let mut ids = instance.item_ids();
    ids.shuffle(rng);
    State::from_bins(ids.into_iter().map(Bin::with_item).collect())
}

/// A randomized bad start: for each shuffled item, open a new bin with
/// probability [`NEW_BIN_PROBABILITY`], otherwise try one uniformly random
/// existing bin (falling back to a new bin if the item doesn't fit).
///
/// Instances with fewer than [`WORST_FALLBACK_THRESHOLD`] items defer to
/// [`worst`].
pub fn random_worst<R: Rng>(instance: &Instance, rng: &mut R) -> State {
    if instance.num_items() < WORST_FALLBACK_THRESHOLD {
        return worst(instance, rng);
    }

    let mut ids = instance.item_ids();
    ids.shuffle(rng);

    let mut state = State::new();
    for id in ids {
        let open_new = rng.random_range(0.0..1.0) < NEW_BIN_PROBABILITY;
        if open_new || state.is_empty() {
            state.bins.push(Bin::with_item(id));
        } else {
            let idx = rng.random_range(0..state.num_bins());
            if state.bins[idx].can_fit(instance, &id) {
                state.bins[idx].push(id);
            } else {
                state.bins.push(Bin::with_item(id));
            }
        }
    }
    state
}

/// Greedy first-fit over an explicit item order.
fn first_fit_order(instance: &Instance, ids: Vec<String>) -> State {
    let mut state = State::new();
    for id in ids {
        place_first_fit(instance, &mut state, id);
    }
    state
}

/// Puts an item into the first bin it fits in, opening a new bin otherwise.
///
/// Shared with the GA repair operator, which reinserts missing items the
/// same way.
pub(crate) fn place_first_fit(instance: &Instance, state: &mut State, id: String) {
    match state.bins.iter_mut().find(|bin| bin.can_fit(instance, &id)) {
        Some(bin) => bin.push(id),
        None => state.bins.push(Bin::with_item(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::objective;
    use crate::problem::Item;
    use crate::random::create_rng;

    fn sample() -> Instance {
        Instance::new(
            10,
            vec![
                Item::new("A", 4),
                Item::new("B", 6),
                Item::new("C", 5),
                Item::new("D", 5),
            ],
        )
    }

    fn large_instance(n: usize) -> Instance {
        let items = (0..n)
            .map(|i| Item::new(format!("i{i}"), (i as u64 % 7) + 1))
            .collect();
        Instance::new(10, items)
    }

    #[test]
    fn test_first_fit_scenario() {
        // A and B fill bin 1 to 10; C opens bin 2; D fills it to 10.
        let instance = sample();
        let state = first_fit(&instance);
        assert_eq!(state.bins[0].items, vec!["A", "B"]);
        assert_eq!(state.bins[1].items, vec!["C", "D"]);
        assert_eq!(objective(&instance, &state), 200.0);
    }

    #[test]
    fn test_best_fit_prefers_tightest_bin() {
        // 7 opens bin 1 (room 3); 5 opens bin 2 (room 5); the 3 must go
        // into bin 1, which it fills exactly, even though bin 2 also fits.
        let instance = Instance::new(
            10,
            vec![Item::new("x", 7), Item::new("y", 5), Item::new("z", 3)],
        );
        let state = best_fit(&instance);
        assert_eq!(state.bins[0].items, vec!["x", "z"]);
        assert_eq!(state.bins[1].items, vec!["y"]);
    }

    #[test]
    fn test_worst_is_one_bin_per_item() {
        let instance = sample();
        let state = worst(&instance, &mut create_rng(42));
        assert_eq!(state.num_bins(), 4);
        assert!(state.bins.iter().all(|bin| bin.len() == 1));
        assert_eq!(objective(&instance, &state), 402.0);
        assert!(state.is_valid(&instance));
    }

    #[test]
    fn test_random_is_valid_and_complete() {
        let instance = large_instance(30);
        for seed in 0..10 {
            let state = random(&instance, &mut create_rng(seed));
            assert!(state.is_valid(&instance), "seed {seed} produced invalid state");
        }
    }

    #[test]
    fn test_random_worst_small_instance_falls_back_to_worst() {
        let instance = sample();
        let state = random_worst(&instance, &mut create_rng(42));
        assert_eq!(state.num_bins(), instance.num_items());
        assert!(state.bins.iter().all(|bin| bin.len() == 1));
    }

    #[test]
    fn test_random_worst_large_instance_is_valid() {
        let instance = large_instance(40);
        for seed in 0..10 {
            let state = random_worst(&instance, &mut create_rng(seed));
            assert!(state.is_valid(&instance), "seed {seed} produced invalid state");
            // With p=0.7 for fresh bins the layout should be far from greedy.
            assert!(state.num_bins() > first_fit(&instance).num_bins());
        }
    }

    #[test]
    fn test_strategy_dispatch() {
        let instance = sample();
        let mut rng = create_rng(42);
        for strategy in [
            InitStrategy::Random,
            InitStrategy::FirstFit,
            InitStrategy::BestFit,
            InitStrategy::Worst,
            InitStrategy::RandomWorst,
        ] {
            let state = strategy.build(&instance, &mut rng);
            assert!(state.is_valid(&instance), "{strategy:?} produced invalid state");
        }
    }

    #[test]
    fn test_initializers_deterministic_under_seed() {
        let instance = large_instance(25);
        let a = random(&instance, &mut create_rng(7));
        let b = random(&instance, &mut create_rng(7));
        assert_eq!(a, b);
    }
}
