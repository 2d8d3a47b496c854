//! # CLI Argument Definitions
//!
//! Command-line interface of `build-registry`, parsed with `clap`.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use uireg_logger::LevelFilter;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "build-registry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate the UI component registry: index module, asset bundles and manifest")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `build` when omitted.
    #[command(subcommand)]
    pub command: Option<AppCommands>,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Project root that registry paths are resolved against
    #[arg(short, long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to `registry.toml` in the project root, if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl GlobalArgs {
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Enumeration of available subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum AppCommands {
    /// Validate the registry and write every artifact
    Build,
    /// Validate the registry without writing anything
    Validate,
}
