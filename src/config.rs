//! Input locations and logging destination.
//!
//! Resolution order for each setting: CLI flag, then environment (a `.env` file in
//! the working directory is loaded first), then the built-in default.

use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "streamlit_data.csv";
pub const DEFAULT_METRICS_PATH: &str = "metric_summary.csv";

pub const ENV_DATA: &str = "VEGDASH_DATA";
pub const ENV_METRICS: &str = "VEGDASH_METRICS";
pub const ENV_LOG_FILE: &str = "VEGDASH_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub metrics_path: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl DashboardConfig {
    /// Resolve against the process environment (after loading `.env`).
    pub fn resolve(
        data: Option<PathBuf>,
        metrics: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Self {
        dotenvy::dotenv().ok();
        Self::resolve_with(data, metrics, log_file, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve_with(
        data: Option<PathBuf>,
        metrics: Option<PathBuf>,
        log_file: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let from_env = |key: &str| env(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        Self {
            data_path: data
                .or_else(|| from_env(ENV_DATA))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            metrics_path: metrics
                .or_else(|| from_env(ENV_METRICS))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_METRICS_PATH)),
            log_file: log_file.or_else(|| from_env(ENV_LOG_FILE)),
        }
    }
}
