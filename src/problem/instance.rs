//! Immutable problem instance: capacity and item table.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single indivisible item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identifier.
    pub id: String,
    /// Size in capacity units. Must be positive.
    pub size: u64,
}

impl Item {
    /// Creates an item.
    pub fn new(id: impl Into<String>, size: u64) -> Self {
        Self {
            id: id.into(),
            size,
        }
    }
}

/// A bin packing instance: one capacity shared by every bin plus the
/// full set of items to place.
///
/// The item order is preserved as given. It defines the "natural" iteration
/// order used by the `first_fit` and `best_fit` initializers and by the
/// GA repair operator when reinserting missing items.
///
/// Capacity and sizes are trusted to be positive; an item larger than the
/// capacity is allowed by the data model and simply forces a permanent
/// overflow penalty in the objective.
#[derive(Debug, Clone)]
pub struct Instance {
    capacity: u64,
    items: Vec<Item>,
    sizes: HashMap<String, u64>,
}

impl Instance {
    /// Creates an instance from a capacity and an ordered item list.
    ///
    /// # Panics
    /// Panics if two items share an identifier.
    pub fn new(capacity: u64, items: Vec<Item>) -> Self {
        let mut sizes = HashMap::with_capacity(items.len());
        for item in &items {
            let previous = sizes.insert(item.id.clone(), item.size);
            assert!(previous.is_none(), "duplicate item id: {}", item.id);
        }
        Self {
            capacity,
            items,
            sizes,
        }
    }

    /// The shared bin capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// The items in their natural (insertion) order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items in the instance.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// The item identifiers in natural order, as an owned list.
    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Size of the item with the given identifier.
    ///
    /// # Panics
    /// Panics if the identifier is not part of the instance.
    pub fn size_of(&self, id: &str) -> u64 {
        *self.sizes.get(id).expect("unknown item id")
    }

    /// Whether the identifier belongs to this instance.
    pub fn contains(&self, id: &str) -> bool {
        self.sizes.contains_key(id)
    }
}
