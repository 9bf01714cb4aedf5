//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec sized for the five anatomical regions.
pub type SmallVec5<T> = SmallVec<[T; 5]>;
