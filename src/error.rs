//! Error types.
//!
//! `LoadError` describes why an input CSV could not be turned into a table.
//! `AppError` is what reaches `main`: a user-facing message plus the process
//! exit code (2 = bad input or arguments, 4 = terminal/rendering/export failure).

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading one of the two input CSVs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("'{path}' has no `{column}` column (found: {found})")]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
        found: String,
    },

    #[error("'{path}' line {line}: invalid date '{value}' (expected {formats})", formats = crate::io::ingest::DATE_FORMATS)]
    InvalidDate {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("'{path}': date {date} appears more than once")]
    DuplicateDate { path: PathBuf, date: chrono::NaiveDate },

    #[error("'{path}' has no item columns besides `date`")]
    NoItems { path: PathBuf },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
