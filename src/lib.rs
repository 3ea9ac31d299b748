//! nodechain: an arena-backed doubly linked list with array-style indexing
//! and slicing, plus a key-indexed extension for LRU recency tracking.
//!
//! - [`List`](crate::ds::List): O(1) push/pop at both ends, negative indices,
//!   range slicing, splice.
//! - [`CacheList`](crate::ds::CacheList): key -> node index over the same
//!   chain for O(1) touch, eviction and removal by key.

pub mod ds;
pub mod error;
pub mod prelude;
