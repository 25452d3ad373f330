//! Table preparation: the load-time quality mask and the per-interaction date filter.

pub mod filter;
pub mod mask;

pub use filter::filter_by_date;
pub use mask::{QualityMask, MASKED_ITEMS};
