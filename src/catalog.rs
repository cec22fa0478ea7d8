use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

use crate::normalize::Normalized;

/// One normalized text from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub source: String,
    pub text: String,
    pub url: Option<String>,
}

impl Description {
    pub fn new(source: impl Into<String>, normalized: Normalized) -> Self {
        Description {
            source: source.into(),
            text: normalized.text,
            url: normalized.url,
        }
    }
}

/// A wine: its directory name and the descriptions found inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub descriptions: Vec<Description>,
}

/// Run-scoped result set, ordered by key.
#[derive(Debug, Clone)]
pub struct Catalog<K: Ord> {
    items: BTreeMap<K, Item>,
}

impl<K: Ord> Default for Catalog<K> {
    fn default() -> Self {
        Catalog {
            items: BTreeMap::new(),
        }
    }
}

impl<K: Ord> Catalog<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first item per key; returns the rejected item on a collision.
    pub fn insert(&mut self, key: K, item: Item) -> Result<(), Item> {
        match self.items.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(item);
                Ok(())
            }
            btree_map::Entry::Occupied(_) => Err(item),
        }
    }

    pub fn get(&self, key: &K) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Item)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
