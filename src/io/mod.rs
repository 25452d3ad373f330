//! Input/output helpers.
//!
//! - price CSV ingest (`ingest`) and the path-keyed table cache (`cache`)
//! - metric summary CSV ingest (`metrics`)
//! - statistics exports (CSV/JSON) (`export`)
//! - input path validation

pub mod cache;
pub mod export;
pub mod ingest;
pub mod metrics;

pub use cache::TableCache;
pub use export::write_summary;
pub use ingest::{load_price_table, read_price_table};
pub use metrics::{load_metric_table, read_metric_table};

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Validate the provided path points to an existing `.csv` file.
pub fn validate_csv_path(path: &Path) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::new(
            2,
            format!("CSV file not found: {}", path.display()),
        ));
    }
    if path.is_dir() {
        return Err(AppError::new(
            2,
            format!("Expected a file, got a directory: {}", path.display()),
        ));
    }
    if path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        != Some(true)
    {
        return Err(AppError::new(
            2,
            format!("Expected a .csv file (got: {}).", path.display()),
        ));
    }

    Ok(path.to_path_buf())
}
