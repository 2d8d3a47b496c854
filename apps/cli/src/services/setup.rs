use crate::models::args::GlobalArgs;
use anyhow::{Context, Result};
use std::path::PathBuf;
use uireg_kernel::config::{DEFAULT_CONFIG_FILE, load_config};
use uireg_kernel::domain::BuildConfig;
use uireg_logger::Logger;

const LOGGER_NAME: &str = "build-registry";

/// Initializes the global subscriber from the verbosity flags.
///
/// # Errors
/// Returns an error if a subscriber is already installed or the log directory is unusable.
pub fn init_logger(args: &GlobalArgs) -> Result<Logger> {
    let mut builder = Logger::builder().name(LOGGER_NAME).level(args.log_level()).json(args.log_json);
    if let Some(dir) = &args.log_dir {
        builder = builder.path(dir);
    }
    builder.init().context("Failed to initialize logging")
}

/// Resolves the build layout.
///
/// An explicit `--config` must exist; otherwise `registry.toml` in the project root is optional.
/// `--root` always wins over a configured root.
///
/// # Errors
/// Returns an error if the config file is missing (when explicit) or malformed.
pub fn resolve_config(args: &GlobalArgs) -> Result<BuildConfig> {
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));

    let mut config: BuildConfig = match &args.config {
        Some(path) => load_config(path, true)
            .with_context(|| format!("Critical: config {} is malformed", path.display()))?,
        None => load_config(root.join(DEFAULT_CONFIG_FILE), false)
            .context("Critical: configuration is malformed")?,
    };

    if args.root.is_some() {
        config.root = root;
    }
    Ok(config)
}
