//! Data types shared across the HRM engine.

pub mod cell;
pub mod collections;
pub mod region;

pub use cell::{Cell, Row};
pub use collections::{FxHashMap, FxHashSet};
pub use region::Region;
