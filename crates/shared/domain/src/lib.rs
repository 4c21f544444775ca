//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O or enrollment logic, just course/student records, their keys,
//! and the configuration shape shared by the shell and the kernel loader.

pub mod config;
pub mod constants;
pub mod ids;
pub mod model;

pub use ids::{CourseCode, StudentId};
pub use model::{Course, Student};
