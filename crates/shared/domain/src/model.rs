//! Course and student records.
//!
//! Records are passive: they hold identity and descriptive attributes only. Who is
//! enrolled where is tracked by the enrollment ledger, never by the records themselves.

use crate::ids::{CourseCode, StudentId};
use serde::{Deserialize, Serialize};

/// A course offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: CourseCode,
    title: String,
    description: String,
    schedule: String,
    capacity: usize,
}

impl Course {
    pub fn new(
        code: impl Into<CourseCode>,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: usize,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
            schedule: schedule.into(),
            capacity,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &CourseCode {
        &self.code
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    /// Maximum roster size.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a roster of `enrolled` students still leaves a free seat.
    #[must_use]
    pub const fn has_room_for(&self, enrolled: usize) -> bool {
        enrolled < self.capacity
    }
}

/// A student who can register for courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
}

impl Student {
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }

    #[must_use]
    pub const fn id(&self) -> &StudentId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_seat_is_still_free() {
        let course = Course::new("CS101", "Intro", "", 2, "Mon 9:00");
        assert!(course.has_room_for(0));
        assert!(course.has_room_for(1));
        assert!(!course.has_room_for(2));
    }
}
