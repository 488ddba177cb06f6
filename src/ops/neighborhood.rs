//! Neighborhood enumeration and single-sample neighbor generation.

use rand::Rng;

use crate::problem::{Bin, Instance, State};

/// Attempt budget for [`random_neighbor`] before it gives up and returns
/// the input unchanged.
pub const MAX_NEIGHBOR_ATTEMPTS: usize = 100;

/// Probability that a sampled perturbation is a relocation rather than a
/// swap.
pub const MOVE_PROBABILITY: f64 = 0.7;

/// Probability that a sampled relocation targets an existing bin rather
/// than opening a new one.
pub const EXISTING_BIN_PROBABILITY: f64 = 0.8;

/// Enumerates the full neighborhood of a state.
///
/// Candidates are, in order:
///
/// 1. every relocation of one item to each *other* existing bin, plus a
///    relocation into a brand-new bin;
/// 2. every exchange of one item each between two distinct bins.
///
/// Bins emptied by a relocation are dropped, and every candidate is
/// filtered through [`State::is_valid`] — overflowing candidates are
/// silently discarded (the move construction itself cannot break the
/// exactly-once invariant).
///
/// This is the combinatorial hot spot of the hill climbing family: the
/// candidate count grows between O(n²) and O(n³) with item and bin counts.
pub fn neighbors(instance: &Instance, state: &State) -> Vec<State> {
    let mut out = Vec::new();
    let bin_count = state.num_bins();

    // Relocations.
    for src in 0..bin_count {
        for pos in 0..state.bins[src].len() {
            for dest in 0..bin_count {
                if src == dest {
                    continue;
                }
                let mut next = state.clone();
                let id = next.bins[src].items.remove(pos);
                next.bins[dest].push(id);
                next.drop_empty_bins();
                if next.is_valid(instance) {
                    out.push(next);
                }
            }

            // Relocation into a brand-new bin.
            let mut next = state.clone();
            let id = next.bins[src].items.remove(pos);
            next.bins.push(Bin::with_item(id));
            next.drop_empty_bins();
            if next.is_valid(instance) {
                out.push(next);
            }
        }
    }

    // Swaps.
    for first in 0..bin_count {
        for pos_a in 0..state.bins[first].len() {
            for second in 0..bin_count {
                if first == second {
                    continue;
                }
                for pos_b in 0..state.bins[second].len() {
                    let mut next = state.clone();
                    let id_a = next.bins[first].items.remove(pos_a);
                    let id_b = next.bins[second].items.remove(pos_b);
                    next.bins[first].push(id_b);
                    next.bins[second].push(id_a);
                    next.drop_empty_bins();
                    if next.is_valid(instance) {
                        out.push(next);
                    }
                }
            }
        }
    }

    out
}

/// Samples one neighbor of a state.
///
/// Each attempt perturbs a fresh copy with a relocation
/// ([`MOVE_PROBABILITY`]) or a swap, drops empty bins, and returns the
/// first copy that passes validation. After [`MAX_NEIGHBOR_ATTEMPTS`]
/// failures the input is returned unchanged — a silent "no move
/// available" stall, not an error.
pub fn random_neighbor<R: Rng>(instance: &Instance, state: &State, rng: &mut R) -> State {
    for _ in 0..MAX_NEIGHBOR_ATTEMPTS {
        let mut next = state.clone();

        if rng.random_range(0.0..1.0) < MOVE_PROBABILITY {
            // Relocation.
            if !next.is_empty() {
                let src = rng.random_range(0..next.num_bins());
                if !next.bins[src].is_empty() {
                    let pos = rng.random_range(0..next.bins[src].len());
                    let id = next.bins[src].items.remove(pos);

                    let to_existing = rng.random_range(0.0..1.0) < EXISTING_BIN_PROBABILITY;
                    if to_existing && next.num_bins() > 1 {
                        let dest = rng.random_range(0..next.num_bins());
                        next.bins[dest].push(id);
                    } else {
                        next.bins.push(Bin::with_item(id));
                    }
                }
            }
        } else {
            // Swap.
            if next.num_bins() >= 2 {
                let first = rng.random_range(0..next.num_bins());
                let second = rng.random_range(0..next.num_bins());
                if first != second
                    && !next.bins[first].is_empty()
                    && !next.bins[second].is_empty()
                {
                    let pos_a = rng.random_range(0..next.bins[first].len());
                    let pos_b = rng.random_range(0..next.bins[second].len());
                    let id_a = next.bins[first].items.remove(pos_a);
                    let id_b = next.bins[second].items.remove(pos_b);
                    next.bins[first].push(id_b);
                    next.bins[second].push(id_a);
                }
            }
        }

        next.drop_empty_bins();
        if next.is_valid(instance) {
            return next;
        }
    }

    state.clone()
}
