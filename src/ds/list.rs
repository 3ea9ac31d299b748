//! Doubly linked list backed by a generation-checked `SlotArena`.
//!
//! Nodes live in the arena and link to each other by `NodeId`, so the
//! forward/backward cycle of a doubly linked chain needs no shared ownership:
//! the arena owns every node, `next`/`prev` are plain handles.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ NodeId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//! ```
//!
//! ## Indexing
//!
//! Positions are `isize`; negative positions count from the tail (`-1` is the
//! last element). Lookups walk from whichever end is closer.
//!
//! | Operation | Out of range |
//! |-----------|--------------|
//! | `get` / `get_mut` / `set` | `None`, list untouched |
//! | `slice` / `slice_remove` | `None` when `start` is outside `[0, len)` |
//! | `insert` | clamps: below zero goes to the front, past the end appends |
//! | `splice` | start at or past the end appends the replacement |
//!
//! A non-positive length selects an empty run: `slice` returns an empty list
//! (not `None`), `slice_remove` returns `None` because nothing was removed.
//!
//! ## Performance
//! - `push_front` / `push_back` / `pop_front` / `pop_back`: O(1)
//! - `front` / `back` / `len` / `is_empty`: O(1)
//! - `get` / `set` / `insert`: O(min(i, n - i))
//! - `slice` / `slice_remove` / `splice`: O(locate + run length)
//! - `index_of` / `remove_value`: O(n)
//!
//! `check_invariants()` verifies the link structure; `debug_validate_invariants()`
//! panics on violation in debug/test builds.
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, Bound, RangeBounds};

use tracing::trace;

use crate::ds::slot_arena::{NodeId, SlotArena};
use crate::error::InvariantError;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly linked list with O(1) boundary operations and array-style indexing.
pub struct List<T> {
    arena: SlotArena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the first element.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.entry(id))
    }

    /// Returns the last element.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.entry(id))
    }

    /// Inserts `value` at the front.
    ///
    /// ```
    /// use nodechain::ds::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2).push_front(1);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn push_front(&mut self, value: T) -> &mut Self {
        self.push_front_id(value);
        self
    }

    /// Inserts `value` at the back.
    pub fn push_back(&mut self, value: T) -> &mut Self {
        self.push_back_id(value);
        self
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.unlink(id)
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.unlink(id)
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns a front-to-back iterator. Call `.rev()` (or use
    /// [`iter_rev`](Self::iter_rev)) to walk back-to-front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns a back-to-front iterator.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        self.iter().rev()
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Copies the elements into a `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the element at `index`; negative indices count from the back.
    ///
    /// ```
    /// use nodechain::ds::List;
    ///
    /// let list: List<_> = ["a", "b", "c"].into_iter().collect();
    /// assert_eq!(list.get(0), Some(&"a"));
    /// assert_eq!(list.get(-1), Some(&"c"));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, index: isize) -> Option<&T> {
        let id = self.node_at(self.resolve_index(index)?)?;
        self.entry(id)
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, index: isize) -> Option<&mut T> {
        let id = self.node_at(self.resolve_index(index)?)?;
        self.entry_mut(id)
    }

    /// Overwrites the element at `index` and returns the stored value.
    /// Out-of-range indices leave the list untouched and return `None`.
    pub fn set(&mut self, index: isize, value: T) -> Option<&T> {
        let id = self.node_at(self.resolve_index(index)?)?;
        let node = self.arena.get_mut(id)?;
        node.value = value;
        Some(&node.value)
    }

    /// Copies up to `length` elements starting at `start` into a new list.
    ///
    /// Returns `None` when `start` is outside `[0, len)`; a non-positive
    /// `length` yields an empty list.
    pub fn slice(&self, start: isize, length: isize) -> Option<List<T>>
    where
        T: Clone,
    {
        let (pos, count) = self.resolve_run(start, length)?;
        Some(self.copy_run(pos, count))
    }

    /// Copies the elements addressed by `range` into a new list.
    ///
    /// ```
    /// use nodechain::ds::List;
    ///
    /// let list: List<_> = (1..=5).collect();
    /// assert_eq!(list.slice_range(1..3).unwrap().to_vec(), vec![2, 3]);
    /// assert_eq!(list.slice_range(-2..).unwrap().to_vec(), vec![4, 5]);
    /// assert!(list.slice_range(5..).is_none());
    /// ```
    pub fn slice_range<R>(&self, range: R) -> Option<List<T>>
    where
        R: RangeBounds<isize>,
        T: Clone,
    {
        let (pos, count) = self.resolve_range(&range)?;
        Some(self.copy_run(pos, count))
    }

    /// Removes up to `length` elements starting at `start` and returns them.
    /// Returns `None` if nothing was removed.
    pub fn slice_remove(&mut self, start: isize, length: isize) -> Option<List<T>> {
        let (pos, count) = self.resolve_run(start, length)?;
        self.remove_run(pos, count)
    }

    /// Removes the elements addressed by `range` and returns them.
    pub fn slice_remove_range<R>(&mut self, range: R) -> Option<List<T>>
    where
        R: RangeBounds<isize>,
    {
        let (pos, count) = self.resolve_range(&range)?;
        self.remove_run(pos, count)
    }

    /// Inserts `value` before position `index`.
    ///
    /// Negative indices count from the back and clamp to the front on
    /// underflow; indices at or past `len` append.
    pub fn insert(&mut self, index: isize, value: T) -> &mut Self {
        let pos = self.clamp_position(index);
        if pos == 0 {
            return self.push_front(value);
        }
        if pos >= self.len() {
            return self.push_back(value);
        }
        let next = self.node_at(pos);
        let prev = next.and_then(|id| self.arena.get(id)).and_then(|n| n.prev);
        self.link_between(prev, next, value);
        self
    }

    /// Removes the first element equal to `value` and returns it.
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.arena.get(id)?;
            if node.value == *value {
                return self.unlink(id);
            }
            cursor = node.next;
        }
        None
    }

    /// Appends every element of `other`, in iteration order.
    pub fn concat<I>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for value in other {
            self.push_back_id(value);
        }
        self
    }

    /// Replaces up to `length` elements starting at `start` with
    /// `replacement`, returning the removed run.
    ///
    /// A non-positive `length` removes nothing and inserts before `start`.
    /// When `start` is at or past the end, `replacement` is appended.
    ///
    /// ```
    /// use nodechain::ds::List;
    ///
    /// let mut list: List<_> = (1..=5).collect();
    /// let removed = list.splice(1, 3, [20, 30]);
    /// assert_eq!(removed.to_vec(), vec![2, 3, 4]);
    /// assert_eq!(list.to_vec(), vec![1, 20, 30, 5]);
    ///
    /// list.splice(10, 1, [99]);
    /// assert_eq!(list.back(), Some(&99));
    /// ```
    pub fn splice<I>(&mut self, start: isize, length: isize, replacement: I) -> List<T>
    where
        I: IntoIterator<Item = T>,
    {
        let pos = self.clamp_position(start);
        let count = if length <= 0 {
            0
        } else {
            (length as usize).min(self.len().saturating_sub(pos))
        };
        self.splice_at(pos, count, replacement, start)
    }

    /// Range form of [`splice`](Self::splice).
    pub fn splice_range<R, I>(&mut self, range: R, replacement: I) -> List<T>
    where
        R: RangeBounds<isize>,
        I: IntoIterator<Item = T>,
    {
        let len = self.len() as isize;
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let pos = self.clamp_position(start);
        if pos >= self.len() {
            return self.splice_at(pos, 0, replacement, start);
        }
        let end = self.resolve_end(range.end_bound(), len);
        let count = end.saturating_sub(pos as isize).clamp(0, len - pos as isize) as usize;
        self.splice_at(pos, count, replacement, start)
    }

    /// Checks the link structure: boundary nil-ness, back-links, and that
    /// both walks cover exactly `len` nodes.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.len();
        match (self.head, self.tail) {
            (None, None) if len == 0 => return Ok(()),
            (None, None) => {
                return Err(InvariantError::new(format!("empty head/tail with len {len}")));
            }
            (Some(_), Some(_)) if len == 0 => {
                return Err(InvariantError::new("head/tail set on an empty list"));
            }
            (Some(_), Some(_)) => {}
            _ => return Err(InvariantError::new("only one of head/tail is set")),
        }
        if len == 1 && self.head != self.tail {
            return Err(InvariantError::new("single node but head != tail"));
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new("forward link to a freed node"))?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "node at position {count} has a mismatched prev link"
                )));
            }
            count += 1;
            if count > len {
                return Err(InvariantError::new("forward walk exceeds len"));
            }
            prev = Some(id);
            cursor = node.next;
        }
        if count != len || prev != self.tail {
            return Err(InvariantError::new(format!(
                "forward walk covered {count} of {len} nodes"
            )));
        }

        let mut count = 0usize;
        let mut cursor = self.tail;
        let mut last = None;
        while let Some(id) = cursor {
            count += 1;
            if count > len {
                return Err(InvariantError::new("backward walk exceeds len"));
            }
            last = Some(id);
            cursor = self.arena.get(id).and_then(|n| n.prev);
        }
        if count != len || last != self.head {
            return Err(InvariantError::new(format!(
                "backward walk covered {count} of {len} nodes"
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("list invariant violated: {err}");
        }
    }

    // -- crate-visible node primitives ----------------------------------------

    pub(crate) fn push_front_id(&mut self, value: T) -> NodeId {
        self.link_between(None, self.head, value)
    }

    pub(crate) fn push_back_id(&mut self, value: T) -> NodeId {
        self.link_between(self.tail, None, value)
    }

    pub(crate) fn front_id(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn back_id(&self) -> Option<NodeId> {
        self.tail
    }

    pub(crate) fn entry(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    pub(crate) fn entry_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Detaches node `id` and returns its payload.
    pub(crate) fn unlink(&mut self, id: NodeId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves node `id` to the front; `false` if `id` is not live.
    pub(crate) fn move_to_front(&mut self, id: NodeId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id).is_some()
    }

    // -- internals -------------------------------------------------------------

    /// Allocates a node and links it between `prev` and `next`, which must be
    /// adjacent (or the matching boundary when `None`).
    fn link_between(&mut self, prev: Option<NodeId>, next: Option<NodeId>, value: T) -> NodeId {
        let id = self.arena.insert(Node { value, prev, next });
        match prev.and_then(|p| self.arena.get_mut(p)) {
            Some(prev_node) => prev_node.next = Some(id),
            None => self.head = Some(id),
        }
        match next.and_then(|n| self.arena.get_mut(n)) {
            Some(next_node) => next_node.prev = Some(id),
            None => self.tail = Some(id),
        }
        id
    }

    /// Joins `prev` and `next` directly, updating head/tail at the ends.
    fn relink(&mut self, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev.and_then(|p| self.arena.get_mut(p)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.arena.get_mut(n)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }
    }

    fn detach(&mut self, id: NodeId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };
        self.relink(prev, next);
        let node = self.arena.get_mut(id)?;
        node.prev = None;
        node.next = None;
        Some(())
    }

    fn attach_front(&mut self, id: NodeId) -> Option<()> {
        let old_head = self.head;
        let node = self.arena.get_mut(id)?;
        node.prev = None;
        node.next = old_head;
        match old_head.and_then(|h| self.arena.get_mut(h)) {
            Some(head_node) => head_node.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        Some(())
    }

    /// Unlinks `count` nodes starting at `first`, joining the surrounding pair
    /// once. Returns the removed run with the predecessor and successor.
    fn detach_run(
        &mut self,
        first: NodeId,
        count: usize,
    ) -> Option<(List<T>, Option<NodeId>, Option<NodeId>)> {
        let prev = self.arena.get(first)?.prev;
        let mut removed = List::with_capacity(count);
        let mut cursor = Some(first);
        for _ in 0..count {
            let Some(node) = cursor.and_then(|id| self.arena.remove(id)) else {
                break;
            };
            cursor = node.next;
            removed.push_back_id(node.value);
        }
        self.relink(prev, cursor);
        Some((removed, prev, cursor))
    }

    fn remove_run(&mut self, pos: usize, count: usize) -> Option<List<T>> {
        if count == 0 {
            return None;
        }
        let first = self.node_at(pos)?;
        let (removed, _, _) = self.detach_run(first, count)?;
        Some(removed)
    }

    fn splice_at<I>(&mut self, pos: usize, count: usize, replacement: I, start: isize) -> List<T>
    where
        I: IntoIterator<Item = T>,
    {
        if pos >= self.len() {
            if pos > self.len() {
                trace!(start, len = self.len(), "splice start past end; appending");
            }
            self.concat(replacement);
            return List::new();
        }
        let Some(first) = self.node_at(pos) else {
            return List::new();
        };
        let (removed, prev, next) = if count == 0 {
            let prev = self.arena.get(first).and_then(|n| n.prev);
            (List::new(), prev, Some(first))
        } else {
            match self.detach_run(first, count) {
                Some(run) => run,
                None => return List::new(),
            }
        };
        let mut prev = prev;
        for value in replacement {
            prev = Some(self.link_between(prev, next, value));
        }
        removed
    }

    fn copy_run(&self, pos: usize, count: usize) -> List<T>
    where
        T: Clone,
    {
        let mut out = List::with_capacity(count);
        let mut cursor = if count == 0 { None } else { self.node_at(pos) };
        for _ in 0..count {
            let Some(node) = cursor.and_then(|id| self.arena.get(id)) else {
                break;
            };
            out.push_back_id(node.value.clone());
            cursor = node.next;
        }
        out
    }

    /// Walks from the nearer end to position `pos`.
    fn node_at(&self, pos: usize) -> Option<NodeId> {
        let len = self.len();
        if pos >= len {
            return None;
        }
        if pos <= len / 2 {
            let mut id = self.head?;
            for _ in 0..pos {
                id = self.arena.get(id)?.next?;
            }
            Some(id)
        } else {
            let mut id = self.tail?;
            for _ in 0..(len - 1 - pos) {
                id = self.arena.get(id)?.prev?;
            }
            Some(id)
        }
    }

    /// Maps a possibly negative index into `[0, len)`.
    fn resolve_index(&self, index: isize) -> Option<usize> {
        let len = self.len();
        let pos = if index < 0 {
            len.checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };
        (pos < len).then_some(pos)
    }

    /// Like `resolve_index` but clamps instead of failing.
    fn clamp_position(&self, index: isize) -> usize {
        if index < 0 {
            self.len().saturating_sub(index.unsigned_abs())
        } else {
            index as usize
        }
    }

    fn resolve_run(&self, start: isize, length: isize) -> Option<(usize, usize)> {
        let pos = self.resolve_index(start)?;
        let count = if length <= 0 {
            0
        } else {
            (length as usize).min(self.len() - pos)
        };
        Some((pos, count))
    }

    fn resolve_end(&self, bound: Bound<&isize>, len: isize) -> isize {
        let absolute = |e: isize| if e < 0 { e + len } else { e };
        match bound {
            Bound::Included(&e) => absolute(e).saturating_add(1),
            Bound::Excluded(&e) => absolute(e),
            Bound::Unbounded => len,
        }
    }

    fn resolve_range<R>(&self, range: &R) -> Option<(usize, usize)>
    where
        R: RangeBounds<isize>,
    {
        let len = self.len() as isize;
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let pos = self.resolve_index(start)?;
        let end = self.resolve_end(range.end_bound(), len);
        let count = (end - pos as isize).clamp(0, len - pos as isize) as usize;
        Some((pos, count))
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = List::with_capacity(iter.size_hint().0);
        list.concat(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.concat(iter);
    }
}

/// Non-destructive concatenation: `&a + &b` clones both operands into a new list.
impl<T: Clone> Add<&List<T>> for &List<T> {
    type Output = List<T>;

    fn add(self, rhs: &List<T>) -> List<T> {
        let mut out = List::with_capacity(self.len() + rhs.len());
        out.concat(self.iter().cloned());
        out.concat(rhs.iter().cloned());
        out
    }
}

impl<T> Add for List<T> {
    type Output = List<T>;

    fn add(mut self, rhs: List<T>) -> List<T> {
        self.concat(rhs);
        self
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Borrowing iterator over a [`List`], double-ended.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

/// Back-to-front iterator returned by [`List::iter_rev`].
pub type IterRev<'a, T> = std::iter::Rev<Iter<'a, T>>;

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Owning iterator over a [`List`].
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
