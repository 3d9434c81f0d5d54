/// Main entry point for the habit tracker CLI
///
/// This file sets up logging, parses command line arguments, resolves the
/// snapshot file location, and runs exactly one command against a freshly
/// loaded tracker.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use habit_tracker::cli::{self, Commands};
use habit_tracker::{HabitTracker, JsonStorage};

/// Default snapshot location: the user's home directory, falling back to the
/// current directory when no home can be resolved
fn default_data_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".habit_tracker_data.json")
}

/// Track your daily habits and build streaks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the snapshot file
    /// If not provided, uses ~/.habit_tracker_data.json
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on command line flags
    let log_level = if cli.verbose {
        "debug"
    } else if cli.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout clean for command output
        .init();

    let data_file = cli.data_file.unwrap_or_else(default_data_file);
    debug!("using snapshot file: {}", data_file.display());

    let result = HabitTracker::load(JsonStorage::new(data_file))
        .and_then(|mut tracker| cli::run(cli.command, &mut tracker));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
