//! Genetic Algorithm (GA).
//!
//! Population-based search over complete bin assignments. Parents are
//! chosen by [`Selection`] on inverse-objective fitness, recombined with a
//! one-point crossover on the *bin list*, and perturbed by a move/swap
//! mutation. Because cutting two parents' bin lists breaks the
//! exactly-once item invariant, every child passes through the
//! [`repair`](operators::repair) operator, which deduplicates and
//! reinserts missing items first-fit.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Falkenauer (1996), *A Hybrid Grouping Genetic Algorithm for Bin Packing*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
