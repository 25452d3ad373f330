//! `vegdash` library crate.
//!
//! The binary (`vegdash`) is a thin wrapper around this library so that:
//!
//! - loading, masking and statistics are testable without spawning processes
//! - the terminal UI and the text report share one render pass
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod prep;
pub mod report;
pub mod stats;
pub mod tui;
