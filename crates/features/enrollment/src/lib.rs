//! # Enrollment
//!
//! The course registry: courses, students, and who is enrolled where.
//!
//! ## Architecture
//!
//! 1. **Records** ([`registrar_domain::Course`], [`registrar_domain::Student`]) hold identity
//!    and descriptive fields only.
//! 2. **Ledger** ([`EnrollmentLedger`]) is the join table. It owns both directions of the
//!    student/course relationship and updates them together, so a student is in a roster
//!    exactly when the course is in that student's list.
//! 3. **Registry** ([`Registry`]) owns the records and the ledger and exposes the operations
//!    the interaction layer calls: add, find, list, register, drop.
//!
//! Every mutation either fully succeeds or returns a [`RegistryError`] with nothing changed.
//!
//! ## Example
//!
//! ```rust
//! use registrar_enrollment::{NewCourse, Registry, RegistryError};
//!
//! let mut registry = Registry::new();
//! registry.add_course(NewCourse::builder().code("CS101").title("Intro").capacity(1).build())?;
//! registry.add_student("S1", "Ada")?;
//! registry.add_student("S2", "Grace")?;
//!
//! let seats = registry.register("S1", "CS101")?;
//! assert!(seats.is_full());
//!
//! let err = registry.register("S2", "CS101").unwrap_err();
//! assert!(matches!(err, RegistryError::CapacityExceeded { .. }));
//! # Ok::<(), RegistryError>(())
//! ```

mod error;
mod ledger;
mod registry;
mod types;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::ledger::EnrollmentLedger;
pub use crate::registry::Registry;
pub use crate::types::{CourseListing, DropOutcome, NewCourse, Occupancy, SeedSummary};
