//! Simulated Annealing (SA).
//!
//! Single-solution trajectory search with the Metropolis acceptance
//! criterion and geometric cooling. Worsening moves are accepted with
//! probability `exp(-delta / T)`, letting the search escape local optima
//! while the temperature is high. An optional reheating schedule raises
//! the temperature again after a long plateau.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{Reheat, SaConfig};
pub use runner::{SaResult, SaRunner};
