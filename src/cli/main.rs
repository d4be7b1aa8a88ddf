//! Command-line interface entry point for `graphview`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use graphview::config::Config;
use graphview::info;
use graphview::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // `stored` mirrors the config file; CLI overrides only apply to this run
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = session_config(&stored, &args);

    init_logging(&args, &config);

    let outcome = match args.command {
        Some(Command::Config { subcommand }) => {
            commands::config::run(subcommand, &mut stored, &defaults)
        }
        Some(Command::Inspect { .. }) => {
            commands::inspect::run(&config).map_err(|e| format!("✗ {e}"))
        }
        Some(Command::Render(_)) | None => {
            commands::render::run(&config).map_err(|e| format!("✗ {e}"))
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// The stored config with this run's CLI flags applied
fn session_config(stored: &Config, args: &Cli) -> Config {
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());
    config
}

/// Apply log level, verbosity, and file logging from flags and config
fn init_logging(args: &Cli, config: &Config) {
    // CLI flag was already folded into config.logging.level; fall back to warn
    let mut level = config.logging.level.parse().unwrap_or(Level::Warn);
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    if config.logging.file.is_empty() {
        return;
    }
    let log_path = PathBuf::from(&config.logging.file);
    if init_file_logging(&log_path) {
        info!("File logging initialized at: {}", log_path.display());
    } else {
        eprintln!(
            "✗ Failed to initialize file logging at: {}",
            log_path.display()
        );
    }
}
