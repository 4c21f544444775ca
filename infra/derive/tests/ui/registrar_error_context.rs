use registrar_derive::registrar_error;
use std::borrow::Cow;

#[registrar_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Course {code} is full{}", format_context(.context))]
    Full { code: String, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    let res: Result<(), std::io::Error> = Err(std::io::Error::other("disk"));
    res.context("Reading roster")
}

fn enroll() -> Result<(), DemoError> {
    let res: Result<(), DemoError> = Err(DemoError::Full { code: "CS101".to_owned(), context: None });
    res.context("Registering S2")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading roster): disk");

    let err = enroll().unwrap_err();
    assert_eq!(err.to_string(), "Course CS101 is full (Registering S2)");
}
