pub mod cache_list;
pub mod list;
pub(crate) mod slot_arena;

pub use cache_list::{CacheList, Entries, Keys};
pub use list::{IntoIter, Iter, IterRev, List};
