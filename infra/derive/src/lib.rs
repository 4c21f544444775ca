#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the registrar crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! registrar-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for domain-specific error enums.
///
/// Turns a plain enum into a `thiserror` error integrated with the rest of the workspace.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(..)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Standard Conversions**: Implements `From<Source>` for variants holding a `source`
///   field (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
/// * **`format_context`**: A module-level helper rendering `Some(ctx)` as ` (ctx)` for use
///   inside `#[error(..)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with **named-field** variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use registrar_derive::registrar_error;
/// use std::borrow::Cow;
///
/// #[registrar_error]
/// pub enum ShellError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn prompt(out: &mut impl std::io::Write) -> Result<(), ShellError> {
///     out.flush().context("Flushing prompt")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn registrar_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
