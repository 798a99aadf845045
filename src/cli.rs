// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `stepplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepplan",
    version,
    about = "Compute earliest start times and total duration for dependent steps.",
    long_about = None
)]
pub struct CliArgs {
    /// Plan files (TOML) to schedule. Each file is an independent request.
    ///
    /// Default: `Stepplan.toml` in the current working directory.
    #[arg(value_name = "PATH")]
    pub plans: Vec<String>,

    /// Give up on a plan if computing its schedule takes longer than this.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STEPPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the steps, but don't compute a schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
