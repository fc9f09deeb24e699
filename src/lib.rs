//! Array-backed ordered map with positional access.
//!
//! [`IndexedMap`] keeps its keys sorted in a flat array so that every entry
//! is reachable both by key (binary search) and by index. Most of the API is
//! a set of index-aware helpers layered on top of that: predicate scans,
//! default-value lookups, bulk removal and copy-with-transform.

pub mod core;

pub use crate::core::defaults::get_with_default;
pub use crate::core::error::{MapError, Result};
pub use crate::core::map::IndexedMap;
