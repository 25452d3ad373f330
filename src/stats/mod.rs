//! Price statistics: per-item percentile summaries and the rolling-mean overlay.

pub mod rolling;
pub mod summary;

pub use rolling::rolling_mean;
pub use summary::{mean, percentile_sorted, summarize, summarize_values};
