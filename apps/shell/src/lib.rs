//! # Registrar Shell
//!
//! The interactive front end of the registrar: a numbered text menu that reads operator
//! commands line by line, calls into the [`Registry`](registrar::enrollment::Registry) and
//! prints the outcome.
//!
//! The shell owns no state of its own. The registry is built in `main` and lent to
//! [`Shell::run`], which is generic over its input and output so whole sessions can be
//! replayed from a byte buffer.
//!
//! ## Example
//! ```rust
//! use registrar::domain::config::ShellConfig;
//! use registrar::enrollment::Registry;
//! use registrar_shell::Shell;
//!
//! let input = "2\nS1\nAda\n0\n";
//! let mut output = Vec::new();
//! let mut registry = Registry::new();
//!
//! Shell::new(input.as_bytes(), &mut output, ShellConfig::default()).run(&mut registry)?;
//!
//! assert!(registry.find_student("S1").is_some());
//! assert!(String::from_utf8_lossy(&output).contains("Student added successfully!"));
//! # Ok::<(), registrar_shell::ShellError>(())
//! ```

mod cli;
mod error;
mod menu;
mod shell;

pub use crate::cli::Cli;
pub use crate::error::{ShellError, ShellErrorExt};
pub use crate::menu::MenuChoice;
pub use crate::shell::Shell;
