//! The join table between students and courses.
//!
//! Both directions of the relationship live here and are only ever changed together:
//! a student id is in a course's roster iff that course code is in the student's
//! registered list. Entries whose list becomes empty are removed, so a register/drop
//! round trip leaves the ledger exactly as it was.

use crate::error::RegistryError;
use crate::types::Occupancy;
use fxhash::FxHashMap;
use registrar_domain::{Course, CourseCode, StudentId};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnrollmentLedger {
    rosters: FxHashMap<CourseCode, Vec<StudentId>>,
    registrations: FxHashMap<StudentId, Vec<CourseCode>>,
}

impl EnrollmentLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats `student` in `course` if there is room.
    ///
    /// The capacity check happens before either side is touched; a rejected
    /// enrollment changes nothing.
    ///
    /// # Errors
    /// * [`RegistryError::AlreadyRegistered`] if the pair already exists.
    /// * [`RegistryError::CapacityExceeded`] if the roster is full.
    pub fn enroll(&mut self, course: &Course, student: &StudentId) -> Result<Occupancy, RegistryError> {
        let roster = self.roster(course.code().as_str());

        if roster.contains(student) {
            return Err(RegistryError::AlreadyRegistered {
                id: student.clone(),
                code: course.code().clone(),
                context: None,
            });
        }

        if !course.has_room_for(roster.len()) {
            return Err(RegistryError::CapacityExceeded {
                code: course.code().clone(),
                capacity: course.capacity(),
                context: None,
            });
        }

        let roster = self.rosters.entry(course.code().clone()).or_default();
        roster.push(student.clone());
        let enrolled = roster.len();

        self.registrations.entry(student.clone()).or_default().push(course.code().clone());

        Ok(Occupancy { enrolled, capacity: course.capacity() })
    }

    /// Removes the pair from both sides. Returns `false` if it did not exist.
    pub fn remove(&mut self, student: &str, code: &str) -> bool {
        let removed_from_roster = detach(&mut self.rosters, code, student);
        let removed_from_student = detach(&mut self.registrations, student, code);
        debug_assert_eq!(removed_from_roster, removed_from_student, "ledger sides diverged");
        removed_from_roster
    }

    /// Students enrolled in `code`, in enrollment order.
    #[must_use]
    pub fn roster(&self, code: &str) -> &[StudentId] {
        self.rosters.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    /// Courses `student` is registered in, in registration order.
    #[must_use]
    pub fn registrations(&self, student: &str) -> &[CourseCode] {
        self.registrations.get(student).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn is_registered(&self, student: &str, code: &str) -> bool {
        self.registrations(student).iter().any(|c| c == code)
    }

    /// Total number of (student, course) pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rosters.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
    }
}

/// Removes `value` from the list stored under `key`, dropping the entry once empty.
fn detach<K, V>(map: &mut FxHashMap<K, Vec<V>>, key: &str, value: &str) -> bool
where
    K: std::borrow::Borrow<str> + std::hash::Hash + Eq,
    V: AsRef<str>,
{
    let Some(list) = map.get_mut(key) else {
        return false;
    };
    let Some(pos) = list.iter().position(|v| v.as_ref() == value) else {
        return false;
    };
    list.remove(pos);
    if list.is_empty() {
        map.remove(key);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(capacity: usize) -> Course {
        Course::new("CS101", "Intro", "", capacity, "Mon 9:00")
    }

    #[test]
    fn enroll_updates_both_sides() {
        let mut ledger = EnrollmentLedger::new();
        let occupancy = ledger.enroll(&course(2), &StudentId::from("S1")).unwrap();

        assert_eq!(occupancy, Occupancy { enrolled: 1, capacity: 2 });
        assert_eq!(ledger.roster("CS101"), &[StudentId::from("S1")]);
        assert_eq!(ledger.registrations("S1"), &[CourseCode::from("CS101")]);
        assert!(ledger.is_registered("S1", "CS101"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn full_course_rejects_without_touching_student_side() {
        let mut ledger = EnrollmentLedger::new();
        let cs101 = course(1);
        ledger.enroll(&cs101, &StudentId::from("S1")).unwrap();

        let err = ledger.enroll(&cs101, &StudentId::from("S2")).unwrap_err();
        assert!(matches!(err, RegistryError::CapacityExceeded { capacity: 1, .. }));
        assert!(ledger.registrations("S2").is_empty());
        assert_eq!(ledger.roster("CS101").len(), 1);
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let mut ledger = EnrollmentLedger::new();
        let cs101 = course(3);
        ledger.enroll(&cs101, &StudentId::from("S1")).unwrap();

        let err = ledger.enroll(&cs101, &StudentId::from("S1")).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_is_idempotent_and_cleans_up() {
        let mut ledger = EnrollmentLedger::new();
        ledger.enroll(&course(1), &StudentId::from("S1")).unwrap();

        assert!(ledger.remove("S1", "CS101"));
        assert!(!ledger.remove("S1", "CS101"));
        assert!(ledger.is_empty());
        assert_eq!(ledger, EnrollmentLedger::new());
    }
}
