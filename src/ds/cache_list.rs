//! Recency list with a key index, the bookkeeping half of an LRU cache.
//!
//! Built on [`List`] plus an `FxHashMap<K, NodeId>` that points at the
//! node holding each key. The chain owns every node; the index only stores
//! handles, and every operation updates both sides together, so an index
//! entry always resolves to a live node.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, NodeId>        chain: List<Keyed<K, V>>
//!   ┌─────────┬─────────┐              head ─► [C] ◄──► [B] ◄──► [A] ◄── tail
//!   │  key A  │  id_1   │                 MRU                       LRU
//!   │  key B  │  id_2   │
//!   │  key C  │  id_3   │
//!   └─────────┴─────────┘
//! ```
//!
//! ## Operations
//! - `prepend_key(k, v)`: insert at MRU; rejects keys already present
//! - `move_to_head_by_key(k)`: touch, relinks the node at MRU
//! - `pop_key()`: evict LRU and return its key
//! - `remove_by_key(k)`: drop an arbitrary entry
//!
//! All of the above are O(1) average. The list enforces no capacity; the
//! owning cache decides when to call `pop_key`.
//!
//! ## Example
//!
//! ```
//! use nodechain::ds::CacheList;
//!
//! let mut recency = CacheList::new();
//! recency.prepend_key("a", 1).unwrap();
//! recency.prepend_key("b", 2).unwrap();
//! recency.prepend_key("c", 3).unwrap();
//! assert!(recency.move_to_head_by_key(&"a"));
//!
//! let order: Vec<_> = recency.keys().copied().collect();
//! assert_eq!(order, vec!["a", "c", "b"]);
//! assert_eq!(recency.pop_key(), Some("b"));
//! ```
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::list::{Iter, List};
use crate::ds::slot_arena::NodeId;
use crate::error::{DuplicateKeyError, InvariantError};

/// Chain payload: the key is fixed when the node is created.
#[derive(Debug, Clone)]
pub(crate) struct Keyed<K, V> {
    key: K,
    value: V,
}

/// Key-indexed recency list: most-recently-used at the head, least at the tail.
pub struct CacheList<K, V> {
    chain: List<Keyed<K, V>>,
    index: FxHashMap<K, NodeId>,
}

impl<K, V> CacheList<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: List::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns `true` if `key` is tracked.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Inserts `key` at the head (MRU).
    ///
    /// Fails without touching the list if `key` is already present.
    pub fn prepend_key(&mut self, key: K, value: V) -> Result<(), DuplicateKeyError> {
        if self.index.contains_key(&key) {
            debug!(len = self.len(), "rejected duplicate key");
            return Err(DuplicateKeyError::new("key already present in cache list"));
        }
        let id = self.chain.push_front_id(Keyed {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        Ok(())
    }

    /// Removes the tail (LRU) entry and returns its key.
    pub fn pop_key(&mut self) -> Option<K> {
        self.pop_entry().map(|(key, _)| key)
    }

    /// Removes the tail (LRU) entry and returns its key and value.
    pub fn pop_entry(&mut self) -> Option<(K, V)> {
        let id = self.chain.back_id()?;
        let Keyed { key, value } = self.chain.unlink(id)?;
        self.index.remove(&key);
        trace!(len = self.len(), "evicted least-recently-used entry");
        Some((key, value))
    }

    /// Marks `key` as most recently used.
    ///
    /// Returns `true` if the key is tracked (including when it is already at
    /// the head), `false` otherwise.
    pub fn move_to_head_by_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&id) => self.chain.move_to_front(id),
            None => false,
        }
    }

    /// Drops the entry for `key`; returns `false` if the key is unknown.
    pub fn remove_by_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(id) = self.index.remove(key) else {
            return false;
        };
        self.chain.unlink(id).is_some()
    }

    /// Returns the value stored with `key` without changing recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        self.chain.entry(id).map(|entry| &entry.value)
    }

    /// Mutable counterpart of [`peek`](Self::peek).
    pub fn peek_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        self.chain.entry_mut(id).map(|entry| &mut entry.value)
    }

    /// Key at the head (most recently used).
    pub fn front_key(&self) -> Option<&K> {
        self.chain.front().map(|entry| &entry.key)
    }

    /// Key at the tail (next to be evicted).
    pub fn back_key(&self) -> Option<&K> {
        self.chain.back().map(|entry| &entry.key)
    }

    /// Keys from MRU to LRU; `.rev()` walks LRU first.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.chain.iter(),
        }
    }

    /// `(key, value)` pairs from MRU to LRU.
    pub fn iter(&self) -> Entries<'_, K, V> {
        Entries {
            inner: self.chain.iter(),
        }
    }

    /// Drops every entry and the key index together.
    pub fn clear(&mut self) {
        self.chain.clear();
        self.index.clear();
    }

    /// Checks the chain structure and that the index maps exactly the keys
    /// present in the chain, each to the node carrying that key.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.chain.check_invariants()?;
        if self.index.len() != self.chain.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but chain holds {} nodes",
                self.index.len(),
                self.chain.len()
            )));
        }
        for (key, &id) in &self.index {
            let entry = self
                .chain
                .entry(id)
                .ok_or_else(|| InvariantError::new("index entry points at a freed node"))?;
            if entry.key != *key {
                return Err(InvariantError::new(
                    "index entry points at a node with a different key",
                ));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("cache list invariant violated: {err}");
        }
    }
}

impl<K, V> Default for CacheList<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheList<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.chain.iter().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}

/// Iterator over the keys of a [`CacheList`], MRU first.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, Keyed<K, V>>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| &entry.key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over `(key, value)` pairs of a [`CacheList`], MRU first.
pub struct Entries<'a, K, V> {
    inner: Iter<'a, Keyed<K, V>>,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Entries<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

impl<K, V> FusedIterator for Entries<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn order<K: Eq + Hash + Clone, V>(list: &CacheList<K, V>) -> Vec<K> {
        list.keys().cloned().collect()
    }

    #[test]
    fn prepend_touch_and_evict_scenario() {
        let mut list = CacheList::new();
        list.prepend_key("a", 1).unwrap();
        list.prepend_key("b", 2).unwrap();
        list.prepend_key("c", 3).unwrap();
        assert_eq!(order(&list), vec!["c", "b", "a"]);

        assert!(list.move_to_head_by_key("a"));
        assert_eq!(order(&list), vec!["a", "c", "b"]);

        assert_eq!(list.pop_key(), Some("b"));
        assert_eq!(order(&list), vec!["a", "c"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn touch_reorders_two_keys() {
        let mut list = CacheList::new();
        list.prepend_key(1, "v1").unwrap();
        list.prepend_key(2, "v2").unwrap();
        assert!(list.move_to_head_by_key(&1));
        assert_eq!(order(&list), vec![1, 2]);
        list.debug_validate_invariants();
    }

    #[test]
    fn pop_key_evicts_oldest_first() {
        let mut list = CacheList::new();
        for k in ["k1", "k2", "k3"] {
            list.prepend_key(k, ()).unwrap();
        }
        assert_eq!(list.pop_key(), Some("k1"));
        assert_eq!(list.pop_key(), Some("k2"));
        assert_eq!(list.pop_key(), Some("k3"));
        assert_eq!(list.pop_key(), None);
        assert!(list.is_empty());
        list.debug_validate_invariants();
    }

    #[test]
    fn duplicate_prepend_is_rejected_without_mutation() {
        let mut list = CacheList::new();
        list.prepend_key("a", 1).unwrap();
        list.prepend_key("b", 2).unwrap();

        let err = list.prepend_key("a", 99).unwrap_err();
        assert!(err.message().contains("already present"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.peek("a"), Some(&1));
        assert_eq!(order(&list), vec!["b", "a"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn touch_head_is_noop_success() {
        let mut list = CacheList::new();
        list.prepend_key("a", 1).unwrap();
        list.prepend_key("b", 2).unwrap();
        assert!(list.move_to_head_by_key("b"));
        assert_eq!(order(&list), vec!["b", "a"]);
    }

    #[test]
    fn touch_tail_and_middle() {
        let mut list = CacheList::new();
        for k in 1..=4 {
            list.prepend_key(k, k * 10).unwrap();
        }
        assert!(list.move_to_head_by_key(&1));
        assert_eq!(order(&list), vec![1, 4, 3, 2]);
        assert_eq!(list.back_key(), Some(&2));

        assert!(list.move_to_head_by_key(&3));
        assert_eq!(order(&list), vec![3, 1, 4, 2]);
        list.debug_validate_invariants();
    }

    #[test]
    fn unknown_key_reports_false() {
        let mut list: CacheList<&str, i32> = CacheList::new();
        assert!(!list.move_to_head_by_key("missing"));
        assert!(!list.remove_by_key("missing"));
        assert_eq!(list.peek("missing"), None);

        list.prepend_key("a", 1).unwrap();
        assert!(!list.move_to_head_by_key("missing"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_by_key_head_middle_tail() {
        let mut list = CacheList::new();
        for k in ["a", "b", "c", "d"] {
            list.prepend_key(k, ()).unwrap();
        }
        assert!(list.remove_by_key("c"));
        assert_eq!(order(&list), vec!["d", "b", "a"]);
        assert!(list.remove_by_key("d"));
        assert_eq!(list.front_key(), Some(&"b"));
        assert!(list.remove_by_key("a"));
        assert_eq!(list.back_key(), Some(&"b"));
        assert!(!list.remove_by_key("a"));
        assert!(!list.contains_key("a"));
        list.debug_validate_invariants();

        assert!(list.remove_by_key("b"));
        assert!(list.is_empty());
        list.debug_validate_invariants();
    }

    #[test]
    fn removed_key_can_be_reinserted() {
        let mut list = CacheList::new();
        list.prepend_key("a", 1).unwrap();
        list.prepend_key("b", 2).unwrap();
        assert!(list.remove_by_key("a"));
        list.prepend_key("a", 3).unwrap();
        assert_eq!(order(&list), vec!["a", "b"]);
        assert_eq!(list.peek("a"), Some(&3));
        list.debug_validate_invariants();
    }

    #[test]
    fn pop_entry_returns_value() {
        let mut list = CacheList::new();
        list.prepend_key(String::from("x"), 5).unwrap();
        assert_eq!(list.pop_entry(), Some((String::from("x"), 5)));
        assert!(!list.contains_key("x"));
    }

    #[test]
    fn peek_mut_does_not_touch() {
        let mut list = CacheList::new();
        list.prepend_key("a", 1).unwrap();
        list.prepend_key("b", 2).unwrap();
        if let Some(v) = list.peek_mut("a") {
            *v = 10;
        }
        assert_eq!(list.peek("a"), Some(&10));
        assert_eq!(order(&list), vec!["b", "a"]);
    }

    #[test]
    fn clear_resets_chain_and_index() {
        let mut list = CacheList::new();
        list.prepend_key("a", 1).unwrap();
        list.prepend_key("b", 2).unwrap();
        list.clear();
        assert!(list.is_empty());
        assert!(!list.contains_key("a"));
        assert_eq!(list.pop_key(), None);
        list.debug_validate_invariants();

        list.prepend_key("a", 3).unwrap();
        assert_eq!(list.len(), 1);
        list.debug_validate_invariants();
    }

    #[test]
    fn iter_yields_pairs_mru_first() {
        let mut list = CacheList::new();
        list.prepend_key(1, "one").unwrap();
        list.prepend_key(2, "two").unwrap();
        let pairs: Vec<_> = list.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![(2, "two"), (1, "one")]);
        let lru_first: Vec<_> = list.keys().rev().copied().collect();
        assert_eq!(lru_first, vec![1, 2]);
        assert_eq!(list.keys().len(), 2);
    }

    #[test]
    fn entries_stay_exhausted() {
        let mut list = CacheList::new();
        list.prepend_key(1, "one").unwrap();
        let mut entries = list.iter();
        assert_eq!(entries.next(), Some((&1, &"one")));
        assert_eq!(entries.next(), None);
        assert_eq!(entries.next(), None);
        assert_eq!(entries.next_back(), None);
    }

    #[test]
    fn debug_renders_as_map() {
        let mut list = CacheList::new();
        list.prepend_key("k", 1).unwrap();
        assert_eq!(format!("{:?}", list), r#"{"k": 1}"#);
    }
}
