use anyhow::Result;
use tracing::info;
use uireg_kernel::domain::BuildConfig;
use uireg_registry::Pipeline;

/// Validates the registry and writes the index module, asset bundles and manifest.
///
/// # Errors
/// Returns the first validation or I/O failure. Nothing is written when validation fails.
pub fn build_registry(config: BuildConfig) -> Result<()> {
    info!(root = %config.root.display(), "Building registry");
    let report = Pipeline::new(config)?.run()?;

    println!(
        "✅ Built registry: {} items, {} asset bundles.",
        report.items,
        report.assets.len()
    );
    Ok(())
}
