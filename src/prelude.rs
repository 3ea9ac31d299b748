pub use crate::ds::{CacheList, Entries, IntoIter, Iter, IterRev, Keys, List};
pub use crate::error::{DuplicateKeyError, InvariantError};
