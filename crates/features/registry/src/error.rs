use crate::schema::Issues;
use std::borrow::Cow;

/// Registry build error type.
#[uireg_derive::uireg_error]
pub enum RegistryError {
    /// The raw registry does not conform to the schema. Nothing has been written.
    #[error("Registry validation failed{} with {} issue(s):\n{issues}", format_context(.context), .issues.len())]
    Validation { issues: Issues, context: Option<Cow<'static, str>> },

    /// A source file could not be read or an artifact could not be written.
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The registry file is not JSON, or an artifact failed to serialize.
    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Rendering the index module failed.
    #[error("Format error{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    /// The embedded registry schema failed to compile.
    #[error("Schema error{}: {message}", format_context(.context))]
    Schema { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
