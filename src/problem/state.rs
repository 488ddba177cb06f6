//! Candidate solutions: bins and states.

use std::collections::HashSet;

use super::instance::Instance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One container: an unordered collection of item identifiers.
///
/// Bins are ephemeral — operators create and discard them freely. The
/// internal `Vec` keeps insertion order only for readability of output;
/// semantically the collection is a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bin {
    /// Identifiers of the items placed in this bin.
    pub items: Vec<String>,
}

impl Bin {
    /// Creates an empty bin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bin holding a single item.
    pub fn with_item(id: impl Into<String>) -> Self {
        Self {
            items: vec![id.into()],
        }
    }

    /// Adds an item to this bin.
    pub fn push(&mut self, id: impl Into<String>) {
        self.items.push(id.into());
    }

    /// Number of items in the bin.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bin holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total size of the items in this bin.
    pub fn total_size(&self, instance: &Instance) -> u64 {
        self.items.iter().map(|id| instance.size_of(id)).sum()
    }

    /// Whether the given item would fit into this bin without overflow.
    pub fn can_fit(&self, instance: &Instance, id: &str) -> bool {
        self.total_size(instance) + instance.size_of(id) <= instance.capacity()
    }
}

/// A complete candidate solution: an ordered sequence of bins.
///
/// A state produced by any operator in this crate is an independently
/// owned value; mutating it can never be observed through another state.
///
/// A state is *valid* (see [`is_valid`](State::is_valid)) when no bin
/// overflows the capacity and the items across all bins cover the
/// instance's item set exactly once each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    /// The bins, in order. Empty bins are dropped by every operator.
    pub bins: Vec<Bin>,
}

impl State {
    /// Creates a state with no bins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state from an existing bin list.
    pub fn from_bins(bins: Vec<Bin>) -> Self {
        Self { bins }
    }

    /// Number of bins in use.
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Whether the state has no bins at all (degenerate).
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of item placements across all bins.
    pub fn item_count(&self) -> usize {
        self.bins.iter().map(Bin::len).sum()
    }

    /// Removes bins left empty by a relocation.
    pub fn drop_empty_bins(&mut self) {
        self.bins.retain(|bin| !bin.is_empty());
    }

    /// Checks the two solution invariants: no bin exceeds the capacity,
    /// and every instance item appears in exactly one bin.
    pub fn is_valid(&self, instance: &Instance) -> bool {
        for bin in &self.bins {
            if bin.total_size(instance) > instance.capacity() {
                return false;
            }
        }

        if self.item_count() != instance.num_items() {
            return false;
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(instance.num_items());
        for bin in &self.bins {
            for id in &bin.items {
                if !instance.contains(id) || !seen.insert(id) {
                    return false;
                }
            }
        }
        true
    }
}
