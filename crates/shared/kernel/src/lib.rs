//! Kernel utilities shared across slices and apps.
//! Keep this crate lightweight: layered config loading and presence guards for operator input.
//!
//! ## Config loading
//! ```rust,no_run
//! use registrar_kernel::config::load_config;
//! use registrar_kernel::domain::config::RegistrarConfig;
//!
//! let cfg: RegistrarConfig = load_config(Some("config/local.toml")).unwrap_or_default();
//! ```
pub mod config;
pub mod validation;

pub use registrar_domain as domain;
