#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the registry builder crates.
//!
//! At the moment the crate provides a single attribute, [`macro@uireg_error`], which turns a
//! plain enum into the error type every library crate in the workspace exposes.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Conversions**: Implements `From<Source>` for variants holding a `source` field (or a
///   field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, .. }` variant exists.
/// * **Formatting Helper**: Emits a module-local `format_context` function for use in
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. Variants wrapping a source must also carry `context: Option<Cow<'static, str>>`.
/// 3. Apply it at most once per module because of the generated `format_context` helper.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[uireg_derive::uireg_error]
/// pub enum RegistryError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String, RegistryError> {
///     std::fs::read_to_string(path).context(format!("Reading {}", path.display()))
/// }
/// ```
#[proc_macro_attribute]
pub fn uireg_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
