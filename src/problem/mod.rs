//! Problem data model.
//!
//! An [`Instance`] is the immutable input of a run: a shared container
//! capacity plus the full item table. A [`State`] is a candidate solution:
//! an ordered sequence of [`Bin`]s partitioning the items.
//!
//! States are plain owned values. Every operator in the crate constructs a
//! new `State` instead of mutating one a caller still holds, so two live
//! states never alias.

mod instance;
mod state;

pub use instance::{Instance, Item};
pub use state::{Bin, State};
