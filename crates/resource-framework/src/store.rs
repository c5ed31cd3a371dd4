//! # Ordered Store
//!
//! The in-memory map a [`ResourceActor`](crate::ResourceActor) owns. Lookups go through a
//! `HashMap`; enumeration goes through a `BTreeMap` keyed by insertion sequence, so listing
//! is reproducible regardless of hashing.
//!
//! Ordering rules:
//! - a new key is appended at the end;
//! - overwriting an existing key keeps its position;
//! - removing a key and inserting it again appends it at the end.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

struct Slot<V> {
    seq: u64,
    value: V,
}

/// Insertion-ordered key/value store.
pub struct OrderedStore<K, V> {
    entries: HashMap<K, Slot<V>>,
    order: BTreeMap<u64, K>,
    next_seq: u64,
}

impl<K, V> Default for OrderedStore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedStore<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|slot| &slot.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key).map(|slot| &mut slot.value)
    }

    /// Inserts or overwrites `key`. Returns `true` when an existing value was replaced.
    pub fn upsert(&mut self, key: K, value: V) -> bool {
        if let Some(slot) = self.entries.get_mut(&key) {
            slot.value = value;
            return true;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, key.clone());
        self.entries.insert(key, Slot { seq, value });
        false
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.entries.remove(key)?;
        self.order.remove(&slot.seq);
        Some(slot.value)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.order
            .values()
            .filter_map(move |key| self.entries.get(key))
            .map(|slot| &slot.value)
    }
}
