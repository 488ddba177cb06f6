//! State operators: initial-state constructors and neighborhood moves.
//!
//! - [`init`]: five constructors producing a first candidate solution,
//!   from greedy heuristics (`first_fit`, `best_fit`) to deliberately bad
//!   starting points (`worst`, `random_worst`) that give improving search
//!   the most room.
//! - [`neighborhood`]: exhaustive neighbor enumeration (used by the hill
//!   climbing family) and single-sample neighbor generation (used by SA
//!   and GA mutation).
//!
//! Every operator returns a freshly owned [`State`](crate::problem::State)
//! and never mutates its input.

pub mod init;
pub mod neighborhood;

pub use init::InitStrategy;
