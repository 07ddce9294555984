//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashMap;
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec sized for bucket neighborhoods (at most a previous and a next bucket).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
