use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "UIREG";
/// Config file looked up in the project root when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "registry.toml";

/// Custom error type for config loading.
#[uireg_derive::uireg_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered under environment overrides.
///
/// 1. **Base File**: `path`, format inferred from its extension (TOML, JSON, YAML...).
///    When `required` is `false` a missing file is skipped and defaults apply.
/// 2. **Environment Overrides**: variables prefixed with `UIREG__`. Nested keys use double
///    underscores (e.g., `UIREG__PUBLIC_DIR` maps to `public_dir`).
///
/// # Errors
/// Returns [`ConfigError`] if a required file is missing, a file cannot be parsed, or the
/// merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use uireg_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Paths {
///     public_dir: String,
/// }
///
/// let cfg: Paths = load_config("registry.toml", false).unwrap_or_default();
/// ```
pub fn load_config<T>(path: impl AsRef<Path>, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, required, None)
}

/// Same as [`load_config`], reading overrides from `env` instead of the process environment
/// when it is `Some`.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: impl AsRef<Path>,
    required: bool,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();

    if path.exists() {
        info!("Loading config from {}", path.display());
    } else {
        debug!("No config file at {}, using defaults", path.display());
    }

    let builder = Config::builder().add_source(File::from(path).required(required)).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .convert_case(config::Case::Snake)
            .source(env),
    );

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
