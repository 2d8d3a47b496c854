use anyhow::Result;
use uireg_kernel::domain::BuildConfig;
use uireg_registry::Pipeline;

/// Checks the registry file without touching any output.
///
/// # Errors
/// Returns a validation error listing every issue, or an error if the file cannot be read.
pub fn validate_registry(config: BuildConfig) -> Result<()> {
    let pipeline = Pipeline::new(config)?;
    let raw = pipeline.load_registry()?;
    let items = pipeline.validate(&raw)?;

    println!("✅ Registry is valid: {} items.", items.len());
    Ok(())
}
