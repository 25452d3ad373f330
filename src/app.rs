//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and resolves input paths
//! - sets up logging
//! - loads the price and metric tables
//! - runs the TUI, prints a report, or lists items

use clap::Parser;

use crate::cli::{Command, InputArgs, ReportArgs};
use crate::config::DashboardConfig;
use crate::domain::ViewState;
use crate::error::AppError;
use crate::io::TableCache;
use crate::logging::LogTarget;

pub mod pipeline;

pub use pipeline::{Dashboard, DashboardView};

/// Entry point for the `vegdash` binary.
pub fn run() -> Result<(), AppError> {
    // `vegdash` and `vegdash -d prices.csv` behave like `vegdash tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Report(args) => handle_report(args),
        Command::Items(args) => handle_items(args),
    }
}

fn resolve_config(input: &InputArgs) -> DashboardConfig {
    DashboardConfig::resolve(
        input.data.clone(),
        input.metrics.clone(),
        input.log_file.clone(),
    )
}

fn handle_tui(args: InputArgs) -> Result<(), AppError> {
    let config = resolve_config(&args);
    let target = match &config.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Off,
    };
    crate::logging::init(target)?;

    let cache = TableCache::default();
    // Load before touching the terminal so input errors print normally.
    let dashboard = Dashboard::load(&cache, &config.data_path, &config.metrics_path)?;
    crate::tui::run(dashboard, cache, config)
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let config = resolve_config(&args.input);
    init_text_logging(&config)?;

    let cache = TableCache::default();
    let dashboard = Dashboard::load(&cache, &config.data_path, &config.metrics_path)?;
    let state = ViewState::from_parts(
        &dashboard.table,
        args.start,
        args.end,
        &args.items,
        args.window,
        args.show_raw,
    )?;

    let view = dashboard.render(&state);
    println!("{}", crate::report::format_dashboard(&view));

    if let Some(path) = &args.export_chart {
        match &view.chart {
            Some(chart) => crate::chart::write_svg(path, chart, crate::chart::svg::DEFAULT_SIZE)?,
            None => {
                return Err(AppError::new(
                    2,
                    "Nothing to chart: select at least one item with --items.",
                ));
            }
        }
    }
    if let Some(path) = &args.export_stats {
        let rows = view.stats.as_deref().unwrap_or_default();
        crate::io::write_summary(path, rows)?;
    }

    Ok(())
}

fn handle_items(args: InputArgs) -> Result<(), AppError> {
    let config = resolve_config(&args);
    init_text_logging(&config)?;

    let cache = TableCache::default();
    let table = cache.get_or_load(&crate::io::validate_csv_path(&config.data_path)?)?;
    println!("{}", crate::report::format_items(&table));
    Ok(())
}

fn init_text_logging(config: &DashboardConfig) -> Result<(), AppError> {
    match &config.log_file {
        Some(path) => crate::logging::init(LogTarget::File(path)),
        None => crate::logging::init(LogTarget::Stderr),
    }
}

/// Rewrite argv so `vegdash` defaults to `vegdash tui`.
///
/// Rules:
/// - `vegdash`                     -> `vegdash tui`
/// - `vegdash -d prices.csv ...`   -> `vegdash tui -d prices.csv ...`
/// - `vegdash --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "report" | "items");
    if is_subcommand {
        return argv;
    }

    // A leading flag is a TUI flag.
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_the_tui() {
        assert_eq!(rewrite_args(argv(&["vegdash"])), argv(&["vegdash", "tui"]));
        assert_eq!(
            rewrite_args(argv(&["vegdash", "-d", "p.csv"])),
            argv(&["vegdash", "tui", "-d", "p.csv"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        for args in [
            argv(&["vegdash", "report", "-i", "onion"]),
            argv(&["vegdash", "items"]),
            argv(&["vegdash", "--help"]),
            argv(&["vegdash", "-V"]),
        ] {
            assert_eq!(rewrite_args(args.clone()), args);
        }
    }
}
