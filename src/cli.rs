// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::manifest::default_manifest_path;

/// Command-line arguments for `multilaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "multilaunch",
    version,
    about = "Launch a list of programs and scripts, one after another, from a manifest.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the manifest (JSON, or TOML when the file ends in `.toml`).
    ///
    /// Default: `programs.json` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_manifest_path())]
    pub manifest: PathBuf,

    /// Base directory that program paths are resolved against.
    ///
    /// Defaults to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MULTILAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print every command, but don't execute any of them.
    #[arg(long)]
    pub dry_run: bool,

    /// Wait for Enter before exiting.
    #[arg(long)]
    pub pause: bool,
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
