use std::borrow::Cow;
use std::io::{Error, ErrorKind};
use uireg_derive::uireg_error;

#[uireg_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let io: Result<(), Error> = Err(Error::new(ErrorKind::NotFound, "gone"));
    let err = io.context("reading ui/button.tsx").unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading ui/button.tsx): gone");

    let internal: Result<(), DemoError> = Err(DemoError::from(String::from("bad state")));
    let err = internal.context("emitting index").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (emitting index): bad state");
}
