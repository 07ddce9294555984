//! Shared data types for Hino.
//! Behavioral labels and collection aliases.

pub mod collections;
pub mod label;

pub use collections::{BTreeMap, FxHashMap, SmallVec, SmallVec2};
pub use label::Label;
