//! Outlier classification from isolation counts.
//!
//! - `classifier`: thresholds the isolation vector against the tolerance limit.
//! - `limit_selector`: picks a stricter limit when too many points were flagged.

mod classifier;
mod limit_selector;

pub use classifier::{classify, outlier_fraction};
pub use limit_selector::revise_limit;
