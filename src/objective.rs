//! Objective evaluation.
//!
//! The objective is minimized and composed of three additive terms:
//!
//! 1. overflow penalty — [`OVERFLOW_PENALTY`] per unit over capacity, per
//!    bin; large enough that any feasible state always beats any
//!    infeasible one;
//! 2. bin count — [`BIN_COST`] per bin in use, the primary signal;
//! 3. wasted space — [`WASTE_WEIGHT`] per empty capacity unit in
//!    non-overflowing bins, a tie-breaker rewarding fuller packing.
//!
//! An empty state (no bins) is degenerate and scores [`f64::MAX`] — an
//! explicit saturating sentinel rather than a float infinity, so it is
//! never mistaken for the result of arithmetic.

use crate::problem::{Instance, State};

/// Penalty per capacity unit of overflow. Dominates every combination of
/// the other two terms on realistic instances.
pub const OVERFLOW_PENALTY: f64 = 10_000.0;

/// Cost per bin in use.
pub const BIN_COST: f64 = 100.0;

/// Weight per unit of empty space in a non-overflowing bin.
pub const WASTE_WEIGHT: f64 = 0.1;

/// Scores a state. Lower is better; an empty state scores `f64::MAX`.
pub fn objective(instance: &Instance, state: &State) -> f64 {
    if state.is_empty() {
        return f64::MAX;
    }

    let capacity = instance.capacity();
    let mut score = 0.0;
    for bin in &state.bins {
        let size = bin.total_size(instance);
        if size > capacity {
            score += OVERFLOW_PENALTY * (size - capacity) as f64;
        } else {
            score += WASTE_WEIGHT * (capacity - size) as f64;
        }
    }
    score + BIN_COST * state.num_bins() as f64
}

/// Inverse of [`objective`], used by GA selection (higher is better).
///
/// Returns `f64::MAX` when the objective is exactly zero.
pub fn fitness(instance: &Instance, state: &State) -> f64 {
    let score = objective(instance, state);
    if score == 0.0 {
        f64::MAX
    } else {
        1.0 / score
    }
}

/// Number of bins in use. Reporting helper.
pub fn num_bins(state: &State) -> usize {
    state.num_bins()
}

/// Total empty space across non-overflowing bins. Reporting helper.
pub fn total_wasted_space(instance: &Instance, state: &State) -> u64 {
    let capacity = instance.capacity();
    state
        .bins
        .iter()
        .map(|bin| bin.total_size(instance))
        .filter(|&size| size <= capacity)
        .map(|size| capacity - size)
        .sum()
}
