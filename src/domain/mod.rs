//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the date-indexed price table and borrowed row views (`PriceTable`, `TableView`)
//! - per-interaction view state (`ViewState`, `RollingWindow`)
//! - summary-statistic rows and the verbatim metric table

pub mod metrics;
pub mod table;
pub mod view;

pub use metrics::*;
pub use table::*;
pub use view::*;
