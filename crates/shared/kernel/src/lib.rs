//! Kernel utilities shared across the registry builder crates.
//! Keep this crate lightweight; today it owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use uireg_kernel::config::load_config;
//! use uireg_kernel::domain::BuildConfig;
//!
//! let cfg: BuildConfig = load_config("registry.toml", false).unwrap_or_default();
//! ```
pub mod config;

pub use uireg_domain as domain;
