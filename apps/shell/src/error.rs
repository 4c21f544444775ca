use std::borrow::Cow;

/// Errors that end an interactive session.
///
/// Registry rejections are not among them: those are reported to the operator and the
/// menu carries on.
#[registrar_derive::registrar_error]
pub enum ShellError {
    /// Reading a command or writing a response failed.
    #[error("Terminal I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
