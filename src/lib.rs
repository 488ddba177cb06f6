//! Local-search metaheuristics for one-dimensional bin packing.
//!
//! Given a set of indivisible items and a fixed container capacity, the
//! crate searches for assignments that use as few containers as possible:
//!
//! - **Hill Climbing (HC)**: four variants — steepest ascent, stochastic,
//!   sideways-move, and random-restart — built on exhaustive neighborhood
//!   enumeration.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with geometric
//!   cooling and an optional reheating schedule for long plateaus.
//! - **Genetic Algorithm (GA)**: population-based search with tournament
//!   or roulette selection, one-point bin-list crossover, and a repair
//!   operator that restores the exactly-once item invariant.
//!
//! # Architecture
//!
//! The search engine is split into leaf components consumed by the three
//! driver families:
//!
//! - [`problem`]: the immutable [`Instance`](problem::Instance) (capacity +
//!   item table) and the combinatorial [`State`](problem::State) (an ordered
//!   partition of all items into bins).
//! - [`objective`]: the additive minimization score (overflow penalty, bin
//!   count, wasted space) and its inverse fitness used by GA selection.
//! - [`ops`]: initial-state constructors, exhaustive neighborhood
//!   enumeration, and single-sample neighbor generation.
//! - [`hc`], [`sa`], [`ga`]: the search drivers, each with a builder-style
//!   config and a result struct carrying the best state found plus
//!   iteration-indexed traces for external reporting.
//!
//! All drivers are single-threaded, synchronous, and deterministic under a
//! fixed seed. Reading problem data from files and rendering score
//! histories are consumer concerns outside this crate.

pub mod ga;
pub mod hc;
pub mod objective;
pub mod ops;
pub mod problem;
pub mod random;
pub mod sa;
