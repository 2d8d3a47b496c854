#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{build, validate};
use crate::models::args::{AppCommands, Cli};
use crate::services::setup;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log = setup::init_logger(&cli.global)?;
    let config = setup::resolve_config(&cli.global)?;

    match cli.command.unwrap_or(AppCommands::Build) {
        AppCommands::Build => build::build_registry(config)?,
        AppCommands::Validate => validate::validate_registry(config)?,
    }

    Ok(())
}
