//! Text reports of the dashboard sections.

pub mod format;

pub use format::{fmt_num, format_dashboard, format_items, format_metrics, format_raw, format_stats};
