//! Error types for the nodechain library.
//!
//! ## Key Components
//!
//! - [`DuplicateKeyError`]: Returned by
//!   [`CacheList::prepend_key`](crate::ds::CacheList::prepend_key) when the key
//!   is already tracked.
//! - [`InvariantError`]: Returned by `check_invariants` when the chain or the
//!   key index is structurally inconsistent.
//!
//! Missing data (empty list, unknown key, index out of range) is never an
//! error; those operations return `Option` or `bool` instead.
//!
//! ## Example Usage
//!
//! ```
//! use nodechain::ds::CacheList;
//! use nodechain::error::DuplicateKeyError;
//!
//! let mut recency: CacheList<&str, u32> = CacheList::new();
//! recency.prepend_key("a", 1).unwrap();
//!
//! let err: DuplicateKeyError = recency.prepend_key("a", 2).unwrap_err();
//! assert!(err.to_string().contains("already present"));
//! assert_eq!(recency.len(), 1);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// DuplicateKeyError
// ---------------------------------------------------------------------------

/// Error returned when inserting a key that is already present in a
/// [`CacheList`](crate::ds::CacheList).
///
/// The rejected insert leaves the list and its key index untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError(String);

impl DuplicateKeyError {
    /// Creates a new `DuplicateKeyError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for DuplicateKeyError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Describes a broken link or a key index that disagrees with its chain.
///
/// [`List::check_invariants`](crate::ds::List::check_invariants) reports a
/// head or tail that is set on one side only, `next`/`prev` pointers that do
/// not mirror each other, or a walk whose length differs from `len()`.
/// [`CacheList::check_invariants`](crate::ds::CacheList::check_invariants)
/// additionally reports an index entry whose node is gone or holds another
/// key. The message names the first mismatch found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
