//! Hill Climbing (HC).
//!
//! Greedy local search over the exhaustive move/swap neighborhood. Four
//! control strategies share the same skeleton:
//!
//! - **Steepest ascent**: always take the strictly best neighbor.
//! - **Stochastic**: take a uniformly random strictly improving neighbor.
//! - **Sideways move**: steepest ascent that may also step to equal-score
//!   neighbors, up to a budget, to cross plateaus.
//! - **Random restart**: repeated steepest ascent from fresh random
//!   starting points, keeping the global best.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*,
//!   ch. 4 (local search)
//! - Selman & Gomes (2006), "Hill-climbing Search"

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner, RestartResult};
