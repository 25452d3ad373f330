//! Command-line parsing for the price dashboard.
//!
//! Argument parsing and command dispatch stay separate from the table/stats code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand};

use crate::domain::RollingWindow;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "vegdash", version, about = "Produce price dashboard (history, rolling means, accuracy summary)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive terminal dashboard (default).
    Tui(InputArgs),
    /// Print the dashboard sections as text, optionally exporting chart/statistics.
    Report(ReportArgs),
    /// List item columns with their date coverage.
    Items(InputArgs),
}

/// Input locations shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct InputArgs {
    /// Price CSV (`date` column + one column per item). Env: VEGDASH_DATA.
    #[arg(short = 'd', long, value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Metric summary CSV (`product` column + metrics). Env: VEGDASH_METRICS.
    #[arg(short = 'm', long, value_name = "CSV")]
    pub metrics: Option<PathBuf>,

    /// Append logs to this file. Env: VEGDASH_LOG_FILE.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// First date to chart (inclusive, e.g. YYYY-MM-DD or MM/DD/YYYY). Defaults to the earliest date.
    #[arg(long, value_parser = parse_cli_date)]
    pub start: Option<NaiveDate>,

    /// Last date to chart (inclusive, same formats as --start). Defaults to the latest date.
    #[arg(long, value_parser = parse_cli_date)]
    pub end: Option<NaiveDate>,

    /// Items to chart and summarize, in order (comma-separated or repeated).
    #[arg(short = 'i', long = "items", value_delimiter = ',')]
    pub items: Vec<String>,

    /// Rolling mean window in days.
    #[arg(short = 'w', long, default_value_t = RollingWindow::DEFAULT,
          value_parser = clap::value_parser!(u16).range(1..=30).map(usize::from))]
    pub window: usize,

    /// Include the date-filtered raw table.
    #[arg(long)]
    pub show_raw: bool,

    /// Write the chart as SVG.
    #[arg(long = "export-chart", value_name = "SVG")]
    pub export_chart: Option<PathBuf>,

    /// Write the statistics table (`.json` for JSON, anything else CSV).
    #[arg(long = "export-stats", value_name = "FILE")]
    pub export_stats: Option<PathBuf>,
}

fn parse_cli_date(s: &str) -> Result<NaiveDate, String> {
    crate::io::ingest::parse_date(s)
        .ok_or_else(|| format!("invalid date '{s}' (expected {})", crate::io::ingest::DATE_FORMATS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_flags_parse() {
        let cli = Cli::parse_from([
            "vegdash", "report", "--items", "onion,garlic", "-i", "radish", "--window", "14",
            "--start", "2020-09-01", "--show-raw",
        ]);
        let Command::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.items, vec!["onion", "garlic", "radish"]);
        assert_eq!(args.window, 14);
        assert_eq!(args.start, NaiveDate::from_ymd_opt(2020, 9, 1));
        assert!(args.end.is_none());
        assert!(args.show_raw);
    }

    #[test]
    fn window_defaults_and_bounds() {
        let cli = Cli::parse_from(["vegdash", "report"]);
        let Command::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.window, 7);
        assert!(Cli::try_parse_from(["vegdash", "report", "--window", "31"]).is_err());
        assert!(Cli::try_parse_from(["vegdash", "report", "--window", "0"]).is_err());
    }

    #[test]
    fn bad_dates_are_rejected() {
        let err = Cli::try_parse_from(["vegdash", "report", "--end", "tomorrow"]).unwrap_err();
        assert!(err.to_string().contains("MM/DD/YYYY"), "{err}");

        let cli = Cli::parse_from(["vegdash", "report", "--start", "09/28/2020"]);
        let Command::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.start, NaiveDate::from_ymd_opt(2020, 9, 28));
    }
}
