use std::borrow::Cow;
use uireg_derive::uireg_error;

#[uireg_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), DemoError> {
    std::fs::read("/definitely/not/here")?;
    Ok(())
}

fn main() {
    let err = open().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: None, .. }));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");
}
