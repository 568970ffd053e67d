//! Command-line driver for nbstrip.
//!
//! Walks the given notebook paths in order and hands each one to
//! [`nbstrip_core::process_file`]. Missing files are skipped; any other
//! failure aborts the run before later paths are attempted.

use clap::Parser;
use log::debug;
use nbstrip_core::{process_file, ProcessOutcome};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Removes leftover ipywidgets state (`metadata.widgets`) from Jupyter
/// notebooks, creating a `.bak` copy of each file first.
#[derive(Debug, Parser)]
#[command(name = "nbstrip", version, about)]
struct Cli {
    /// Notebook files to clean
    #[arg(value_name = "NOTEBOOK")]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let _logger = init_logging();

    let cli = Cli::parse();
    if cli.paths.is_empty() {
        eprintln!("Usage: nbstrip notebook1.ipynb [notebook2.ipynb ...]");
        return ExitCode::from(1);
    }

    match run(&cli.paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::from(1)
        }
    }
}

fn run(paths: &[PathBuf]) -> nbstrip_core::Result<()> {
    debug!("processing {} path(s)", paths.len());
    for path in paths {
        let outcome = process_file(path)?;
        report(path, &outcome);
    }
    Ok(())
}

/// Prints the tagged status lines for one processed path. These go to stdout
/// and are informational only, not a machine-readable contract.
fn report(path: &Path, outcome: &ProcessOutcome) {
    match outcome {
        ProcessOutcome::Skipped => {
            println!("[SKIP] Not found: {}", path.display());
        }
        ProcessOutcome::NoChange { backup } => {
            println!("[BACKUP] {} -> {}", path.display(), backup.display());
            println!("[NO CHANGE] {} (no metadata.widgets found)", path.display());
        }
        ProcessOutcome::Patched { backup, outcome } => {
            println!("[BACKUP] {} -> {}", path.display(), backup.display());
            for index in &outcome.removed_cells {
                println!("  - Removed metadata.widgets from cell {index}");
            }
            if outcome.removed_top_level {
                println!("  - Removed top-level metadata.widgets");
            }
            println!("[PATCHED] {}", path.display());
        }
    }
}

/// Starts diagnostics logging to stderr, level taken from `RUST_LOG` with a
/// `warn` default so the tagged stdout lines stay the only output by default.
fn init_logging() -> Option<flexi_logger::LoggerHandle> {
    flexi_logger::Logger::try_with_env_or_str("warn")
        .ok()?
        .start()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_multiple_paths_in_order() {
        let cli = Cli::parse_from(["nbstrip", "a.ipynb", "b.ipynb"]);
        assert_eq!(
            cli.paths,
            vec![PathBuf::from("a.ipynb"), PathBuf::from("b.ipynb")]
        );
    }

    #[test]
    fn test_cli_accepts_zero_paths_for_manual_usage_check() {
        // Zero paths parses fine; main turns it into usage + exit 1.
        let cli = Cli::parse_from(["nbstrip"]);
        assert!(cli.paths.is_empty());
    }
}
