//! Crossover, repair, and mutation.

use std::collections::HashSet;

use rand::Rng;

use crate::ops::init::place_first_fit;
use crate::problem::{Bin, Instance, State};

/// One-point crossover on the *bin lists* of two parents.
///
/// Independent cut points are drawn from `0..=len` for each parent; child
/// A is `parent1[..cut1] + parent2[cut2..]` and child B the mirror image.
/// Concatenating bin lists duplicates and drops items, so both children
/// are [`repair`]ed before being returned. Parents with no bins pass
/// through as clones.
pub fn crossover<R: Rng>(
    instance: &Instance,
    parent1: &State,
    parent2: &State,
    rng: &mut R,
) -> (State, State) {
    if parent1.is_empty() || parent2.is_empty() {
        return (parent1.clone(), parent2.clone());
    }

    let cut1 = rng.random_range(0..=parent1.num_bins());
    let cut2 = rng.random_range(0..=parent2.num_bins());

    let child_a: Vec<Bin> = parent1.bins[..cut1]
        .iter()
        .chain(parent2.bins[cut2..].iter())
        .cloned()
        .collect();
    let child_b: Vec<Bin> = parent2.bins[..cut2]
        .iter()
        .chain(parent1.bins[cut1..].iter())
        .cloned()
        .collect();

    (
        repair(instance, State::from_bins(child_a)),
        repair(instance, State::from_bins(child_b)),
    )
}

/// Restores the exactly-once item invariant.
///
/// Scans bins in order keeping only the first occurrence of each item,
/// drops bins left empty, then reinserts every absent item (in the
/// instance's natural order) via first-fit, opening new bins as needed.
///
/// The result always satisfies the exactly-once invariant; it may use
/// more bins than the input, so callers must not assume repair preserves
/// the objective. Idempotent on valid states.
pub fn repair(instance: &Instance, state: State) -> State {
    let mut seen: HashSet<String> = HashSet::with_capacity(instance.num_items());
    let mut repaired = State::new();

    for bin in state.bins {
        let mut cleaned = Bin::new();
        for id in bin.items {
            if instance.contains(&id) && seen.insert(id.clone()) {
                cleaned.push(id);
            }
        }
        if !cleaned.is_empty() {
            repaired.bins.push(cleaned);
        }
    }

    for item in instance.items() {
        if !seen.contains(&item.id) {
            place_first_fit(instance, &mut repaired, item.id.clone());
        }
    }

    repaired
}

/// Perturbs an individual with one random move or swap.
///
/// - Move: a random item leaves its bin; with probability 0.5 (and more
///   than one bin present) it joins a uniformly random existing bin,
///   otherwise it opens a new one.
/// - Swap: two random distinct non-empty bins exchange one random item
///   each.
///
/// Neither operation can break the exactly-once invariant, but the result
/// is re-checked defensively and [`repair`]ed if needed.
pub fn mutate<R: Rng>(instance: &Instance, individual: &State, rng: &mut R) -> State {
    let mut mutated = individual.clone();
    if mutated.is_empty() {
        return mutated;
    }

    if rng.random_bool(0.5) {
        // Move.
        let src = rng.random_range(0..mutated.num_bins());
        if !mutated.bins[src].is_empty() {
            let pos = rng.random_range(0..mutated.bins[src].len());
            let id = mutated.bins[src].items.remove(pos);

            let to_existing = rng.random_range(0.0..1.0) < 0.5;
            if to_existing && mutated.num_bins() > 1 {
                let dest = rng.random_range(0..mutated.num_bins());
                mutated.bins[dest].push(id);
            } else {
                mutated.bins.push(Bin::with_item(id));
            }
        }
    } else {
        // Swap.
        if mutated.num_bins() >= 2 {
            let first = rng.random_range(0..mutated.num_bins());
            let second = rng.random_range(0..mutated.num_bins());
            if first != second
                && !mutated.bins[first].is_empty()
                && !mutated.bins[second].is_empty()
            {
                let pos_a = rng.random_range(0..mutated.bins[first].len());
                let pos_b = rng.random_range(0..mutated.bins[second].len());
                let id_a = mutated.bins[first].items.remove(pos_a);
                let id_b = mutated.bins[second].items.remove(pos_b);
                mutated.bins[first].push(id_b);
                mutated.bins[second].push(id_a);
            }
        }
    }

    mutated.drop_empty_bins();

    if !mutated.is_valid(instance) {
        mutated = repair(instance, mutated);
    }

    mutated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::init;
    use crate::problem::Item;
    use crate::random::create_rng;
    use proptest::prelude::*;

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

    fn state_of(bins: &[&[&str]]) -> State {
        State::from_bins(
            bins.iter()
                .map(|items| Bin {
                    items: items.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_repair_is_identity_on_valid_state() {
        let instance = sample();
        let state = state_of(&[&["A", "B"], &["C", "D"]]);
        let repaired = repair(&instance, state.clone());
        assert_eq!(repaired, state);
    }

    #[test]
    fn test_repair_drops_later_duplicates() {
        let instance = sample();
        // A appears twice; the first occurrence wins.
        let state = state_of(&[&["A", "B"], &["A", "C"], &["D"]]);
        let repaired = repair(&instance, state);
        assert!(repaired.is_valid(&instance));
        assert_eq!(repaired.bins[0].items, vec!["A", "B"]);
        assert_eq!(repaired.bins[1].items, vec!["C"]);
    }

    #[test]
    fn test_repair_reinserts_missing_first_fit() {
        let instance = sample();
        // C and D are missing; C (size 5) doesn't fit [A,B], so both land
        // in a new bin.
        let state = state_of(&[&["A", "B"]]);
        let repaired = repair(&instance, state);
        assert!(repaired.is_valid(&instance));
        assert_eq!(repaired.bins[1].items, vec!["C", "D"]);
    }

    #[test]
    fn test_repair_drops_emptied_bins() {
        let instance = sample();
        // The middle bin holds only a duplicate and must disappear.
        let state = state_of(&[&["A", "B"], &["B"], &["C", "D"]]);
        let repaired = repair(&instance, state);
        assert!(repaired.is_valid(&instance));
        assert_eq!(repaired.num_bins(), 2);
    }

    #[test]
    fn test_repair_from_nothing_rebuilds_first_fit() {
        let instance = sample();
        let repaired = repair(&instance, State::new());
        assert_eq!(repaired, init::first_fit(&instance));
    }

    #[test]
    fn test_crossover_children_are_valid() {
        let instance = sample();
        let p1 = state_of(&[&["A", "B"], &["C", "D"]]);
        let p2 = state_of(&[&["A"], &["B"], &["C"], &["D"]]);
        let mut rng = create_rng(42);

        for _ in 0..50 {
            let (a, b) = crossover(&instance, &p1, &p2, &mut rng);
            assert!(a.is_valid(&instance));
            assert!(b.is_valid(&instance));
        }
    }

    #[test]
    fn test_crossover_does_not_mutate_parents() {
        let instance = sample();
        let p1 = state_of(&[&["A", "B"], &["C", "D"]]);
        let p2 = state_of(&[&["A"], &["B"], &["C"], &["D"]]);
        let (s1, s2) = (p1.clone(), p2.clone());
        let mut rng = create_rng(42);
        let _ = crossover(&instance, &p1, &p2, &mut rng);
        assert_eq!(p1, s1);
        assert_eq!(p2, s2);
    }

    #[test]
    fn test_crossover_empty_parent_passes_through() {
        let instance = sample();
        let p1 = State::new();
        let p2 = state_of(&[&["A", "B"], &["C", "D"]]);
        let mut rng = create_rng(42);
        let (a, b) = crossover(&instance, &p1, &p2, &mut rng);
        assert_eq!(a, p1);
        assert_eq!(b, p2);
    }

    #[test]
    fn test_mutate_preserves_validity() {
        let instance = sample();
        let state = state_of(&[&["A"], &["B"], &["C"], &["D"]]);
        let mut rng = create_rng(42);

        for _ in 0..100 {
            let mutated = mutate(&instance, &state, &mut rng);
            assert!(mutated.is_valid(&instance));
        }
    }

    #[test]
    fn test_mutate_empty_state_is_no_op() {
        let instance = sample();
        let mut rng = create_rng(42);
        let mutated = mutate(&instance, &State::new(), &mut rng);
        assert!(mutated.is_empty());
    }

    fn arb_instance() -> impl Strategy<Value = Instance> {
        proptest::collection::vec(1u64..=10, 1..12).prop_map(|sizes| {
            let items = sizes
                .into_iter()
                .enumerate()
                .map(|(i, size)| Item::new(format!("i{i}"), size))
                .collect();
            Instance::new(10, items)
        })
    }

    proptest! {
        #[test]
        fn prop_crossover_restores_exactly_once(instance in arb_instance(), seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let p1 = init::random(&instance, &mut rng);
            let p2 = init::random(&instance, &mut rng);
            let (a, b) = crossover(&instance, &p1, &p2, &mut rng);
            prop_assert!(a.is_valid(&instance));
            prop_assert!(b.is_valid(&instance));
        }

        #[test]
        fn prop_repair_idempotent(instance in arb_instance(), seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let state = init::random(&instance, &mut rng);
            let once = repair(&instance, state.clone());
            let twice = repair(&instance, once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_mutate_preserves_exactly_once(instance in arb_instance(), seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let state = init::worst(&instance, &mut rng);
            let mutated = mutate(&instance, &state, &mut rng);
            prop_assert!(mutated.is_valid(&instance));
        }
    }
}
