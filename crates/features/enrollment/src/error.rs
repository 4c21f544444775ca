use registrar_domain::{CourseCode, StudentId};
use registrar_kernel::validation::ValidationError;
use std::borrow::Cow;

/// Failures reported by the registry. None of them leave partial state behind.
#[registrar_derive::registrar_error]
pub enum RegistryError {
    #[error("Unknown student '{id}'{}", format_context(.context))]
    UnknownStudent { id: StudentId, context: Option<Cow<'static, str>> },

    #[error("Unknown course '{code}'{}", format_context(.context))]
    UnknownCourse { code: CourseCode, context: Option<Cow<'static, str>> },

    #[error("Course '{code}' is full ({capacity} seats){}", format_context(.context))]
    CapacityExceeded { code: CourseCode, capacity: usize, context: Option<Cow<'static, str>> },

    #[error("Student '{id}' is already registered for '{code}'{}", format_context(.context))]
    AlreadyRegistered { id: StudentId, code: CourseCode, context: Option<Cow<'static, str>> },

    #[error("Course '{code}' already exists{}", format_context(.context))]
    DuplicateCourse { code: CourseCode, context: Option<Cow<'static, str>> },

    #[error("Student '{id}' already exists{}", format_context(.context))]
    DuplicateStudent { id: StudentId, context: Option<Cow<'static, str>> },

    #[error("Invalid input{}: {source}", format_context(.context))]
    InvalidInput { source: ValidationError, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    /// `true` for lookups that matched nothing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownStudent { .. } | Self::UnknownCourse { .. })
    }
}
