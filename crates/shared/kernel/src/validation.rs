//! Presence guards for operator-supplied values.
//!
//! Only presence is checked: a value must contain at least one visible character and a
//! capacity must be positive. Anything beyond that is the caller's business.

use std::borrow::Cow;

#[registrar_derive::registrar_error]
pub enum ValidationError {
    #[error("Missing {field}{}", format_context(.context))]
    Missing { field: &'static str, context: Option<Cow<'static, str>> },

    #[error("{field} must be greater than zero{}", format_context(.context))]
    NotPositive { field: &'static str, context: Option<Cow<'static, str>> },
}

/// Stateless guard used by the registry before it touches any collection.
#[derive(Debug)]
pub struct InputGuard;

impl InputGuard {
    /// Returns the value trimmed of surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`ValidationError::Missing`] when nothing visible is left.
    pub fn present<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing { field, context: None });
        }
        Ok(trimmed)
    }

    /// # Errors
    /// Returns [`ValidationError::NotPositive`] for zero.
    pub fn positive(field: &'static str, value: usize) -> Result<usize, ValidationError> {
        if value == 0 {
            return Err(ValidationError::NotPositive { field, context: None });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_trims_and_rejects_blank() {
        assert_eq!(InputGuard::present("course code", "  CS101 ").unwrap(), "CS101");
        let err = InputGuard::present("course code", " \t").unwrap_err();
        assert_eq!(err.to_string(), "Missing course code");
    }

    #[test]
    fn positive_rejects_zero() {
        assert_eq!(InputGuard::positive("capacity", 3).unwrap(), 3);
        let err = InputGuard::positive("capacity", 0).context("CS101").unwrap_err();
        assert_eq!(err.to_string(), "capacity must be greater than zero (CS101)");
    }
}
