//! CLI argument definitions for `graphview`

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use graphview::config::ConfigOverrides;
use graphview::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `width`, `output`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Options shared by rendering
#[derive(Debug, Default, clap::Args)]
pub struct RenderArgs {
    /// Path to the JSON graph description (defaults to config `input`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output HTML path (defaults to config `output`)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Canvas width as a CSS length (e.g. 1500px, 100%)
    #[arg(long, value_name = "LENGTH")]
    pub width: Option<String>,

    /// Canvas height as a CSS length
    #[arg(long, value_name = "LENGTH")]
    pub height: Option<String>,

    /// Disable the force-directed physics simulation
    #[arg(long)]
    pub no_physics: bool,

    /// Draw arrowheads on edges
    #[arg(long)]
    pub directed: bool,

    /// Keep edges that reference undeclared nodes instead of failing
    #[arg(long)]
    pub allow_dangling: bool,

    /// Title of the generated page
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a graph description to an interactive HTML page.
    Render(RenderArgs),
    /// Print node/edge counts, duplicate ids, and dangling edges.
    Inspect {
        /// Path to the JSON graph description (defaults to config `input`)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "graphview",
    about = "Render a JSON graph description as an interactive HTML network",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute. Without one, renders the configured input to
    /// the configured output.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl RenderArgs {
    /// Convert render flags into config overrides
    ///
    /// Boolean switches only ever override in the direction they name; an
    /// absent switch leaves the config value alone.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width.clone(),
            height: self.height.clone(),
            physics: self.no_physics.then_some(false),
            directed: self.directed.then_some(true),
            title: self.title.clone(),
            input: self
                .input
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            output: self
                .output
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            allow_dangling_edges: self.allow_dangling.then_some(true),
            ..ConfigOverrides::default()
        }
    }
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Global flags only affect logging; rendering flags come from the
    /// `render` subcommand, if any.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let mut overrides = match &self.command {
            Some(Command::Render(render)) => render.to_config_overrides(),
            Some(Command::Inspect { input }) => ConfigOverrides {
                input: input.as_ref().map(|p| p.to_string_lossy().to_string()),
                ..ConfigOverrides::default()
            },
            Some(Command::Config { .. }) | None => ConfigOverrides::default(),
        };
        overrides.level = self.log_level.map(|lvl| lvl.to_string());
        overrides.file = self
            .log_file
            .as_ref()
            .map(|p| p.to_string_lossy().to_string());
        overrides
    }
}
