use crate::error::{RegistryError, RegistryErrorExt};
use crate::ledger::EnrollmentLedger;
use crate::types::{CourseListing, DropOutcome, NewCourse, Occupancy, SeedSummary};
use fxhash::FxHashMap;
use registrar_domain::config::SeedConfig;
use registrar_domain::{Course, CourseCode, Student, StudentId};
use registrar_kernel::validation::InputGuard;
use tracing::{debug, info, warn};

/// Owns every course, every student and the enrollment ledger between them.
///
/// Courses and students are kept in insertion order for listing and indexed by key for
/// lookups. Keys are unique: adding an existing key is rejected rather than shadowed.
/// Every key argument, on adds and lookups alike, is trimmed of surrounding whitespace.
#[derive(Debug, Default)]
pub struct Registry {
    courses: Vec<Course>,
    course_index: FxHashMap<CourseCode, usize>,
    students: Vec<Student>,
    student_index: FxHashMap<StudentId, usize>,
    ledger: EnrollmentLedger,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course and returns its (trimmed) code.
    ///
    /// # Errors
    /// * [`RegistryError::InvalidInput`] for a blank code or title, or zero capacity.
    /// * [`RegistryError::DuplicateCourse`] if the code is taken.
    pub fn add_course(&mut self, new: NewCourse) -> Result<CourseCode, RegistryError> {
        let code = CourseCode::new(InputGuard::present("course code", new.code.as_str())?);
        let title = InputGuard::present("course title", &new.title)?;
        let capacity = InputGuard::positive("capacity", new.capacity).context(code.to_string())?;

        if self.course_index.contains_key(code.as_str()) {
            warn!(course = %code, "Rejected duplicate course");
            return Err(RegistryError::DuplicateCourse { code, context: None });
        }

        let course = Course::new(code.clone(), title, new.description, capacity, new.schedule);
        self.course_index.insert(code.clone(), self.courses.len());
        self.courses.push(course);

        info!(course = %code, capacity, "Course added");
        Ok(code)
    }

    /// Adds a student and returns their (trimmed) id.
    ///
    /// # Errors
    /// * [`RegistryError::InvalidInput`] for a blank id or name.
    /// * [`RegistryError::DuplicateStudent`] if the id is taken.
    pub fn add_student(
        &mut self,
        id: impl Into<StudentId>,
        name: impl AsRef<str>,
    ) -> Result<StudentId, RegistryError> {
        let id = StudentId::new(InputGuard::present("student id", id.into().as_str())?);
        let name = InputGuard::present("student name", name.as_ref())?;

        if self.student_index.contains_key(id.as_str()) {
            warn!(student = %id, "Rejected duplicate student");
            return Err(RegistryError::DuplicateStudent { id, context: None });
        }

        self.student_index.insert(id.clone(), self.students.len());
        self.students.push(Student::new(id.clone(), name));

        info!(student = %id, "Student added");
        Ok(id)
    }

    #[must_use]
    pub fn find_course(&self, code: &str) -> Option<&Course> {
        let code = code.trim();
        let found = self.course_index.get(code).and_then(|&idx| self.courses.get(idx));
        debug!(course = code, found = found.is_some(), "Course lookup");
        found
    }

    #[must_use]
    pub fn find_student(&self, id: &str) -> Option<&Student> {
        let id = id.trim();
        let found = self.student_index.get(id).and_then(|&idx| self.students.get(idx));
        debug!(student = id, found = found.is_some(), "Student lookup");
        found
    }

    /// All courses in insertion order.
    pub fn courses(&self) -> impl ExactSizeIterator<Item = &Course> {
        self.courses.iter()
    }

    /// All students in insertion order.
    pub fn students(&self) -> impl ExactSizeIterator<Item = &Student> {
        self.students.iter()
    }

    /// Courses in insertion order with their live enrollment counts.
    #[must_use]
    pub fn list_courses(&self) -> Vec<CourseListing> {
        self.courses
            .iter()
            .map(|course| CourseListing {
                code: course.code().clone(),
                title: course.title().to_owned(),
                enrolled: self.ledger.roster(course.code().as_str()).len(),
                capacity: course.capacity(),
            })
            .collect()
    }

    /// Read-only roster of a course, `None` if the course does not exist.
    #[must_use]
    pub fn roster(&self, code: &str) -> Option<&[StudentId]> {
        self.find_course(code).map(|course| self.ledger.roster(course.code().as_str()))
    }

    /// Read-only list of a student's courses, `None` if the student does not exist.
    #[must_use]
    pub fn registered_courses(&self, id: &str) -> Option<&[CourseCode]> {
        self.find_student(id).map(|student| self.ledger.registrations(student.id().as_str()))
    }

    #[must_use]
    pub fn occupancy(&self, code: &str) -> Option<Occupancy> {
        self.find_course(code).map(|course| Occupancy {
            enrolled: self.ledger.roster(course.code().as_str()).len(),
            capacity: course.capacity(),
        })
    }

    /// The enrollment ledger, for read-only inspection.
    #[must_use]
    pub const fn ledger(&self) -> &EnrollmentLedger {
        &self.ledger
    }

    /// Registers a student for a course.
    ///
    /// Both keys are resolved first; the capacity check runs before either side of the
    /// relationship is updated, so any failure leaves the registry untouched.
    ///
    /// # Errors
    /// * [`RegistryError::UnknownStudent`] / [`RegistryError::UnknownCourse`] if a key matches nothing.
    /// * [`RegistryError::AlreadyRegistered`] if the pair already exists.
    /// * [`RegistryError::CapacityExceeded`] if the course is full.
    pub fn register(&mut self, student_id: &str, course_code: &str) -> Result<Occupancy, RegistryError> {
        let (student, course) = self.resolve(student_id, course_code)?;
        let (student_id, course_code) = (student_id.trim(), course_code.trim());

        let outcome = self.ledger.enroll(&self.courses[course], self.students[student].id());
        match &outcome {
            Ok(occupancy) => info!(
                student = student_id,
                course = course_code,
                enrolled = occupancy.enrolled,
                capacity = occupancy.capacity,
                "Student registered"
            ),
            Err(err) => warn!(student = student_id, course = course_code, %err, "Registration rejected"),
        }
        outcome
    }

    /// Drops a student from a course. Dropping a pair that does not exist is a no-op.
    ///
    /// # Errors
    /// [`RegistryError::UnknownStudent`] / [`RegistryError::UnknownCourse`] if a key matches nothing.
    pub fn drop_course(&mut self, student_id: &str, course_code: &str) -> Result<DropOutcome, RegistryError> {
        self.resolve(student_id, course_code)?;
        let (student_id, course_code) = (student_id.trim(), course_code.trim());

        if self.ledger.remove(student_id, course_code) {
            info!(student = student_id, course = course_code, "Student dropped course");
            Ok(DropOutcome::Dropped)
        } else {
            debug!(student = student_id, course = course_code, "Drop requested for unregistered pair");
            Ok(DropOutcome::NotRegistered)
        }
    }

    /// Loads seed courses and students, stopping at the first rejected entry.
    ///
    /// # Errors
    /// Any [`RegistryError`] from [`Registry::add_course`] / [`Registry::add_student`],
    /// with the offending seed entry as context.
    pub fn seed(&mut self, seed: &SeedConfig) -> Result<SeedSummary, RegistryError> {
        let mut summary = SeedSummary::default();

        for (idx, course) in seed.courses.iter().enumerate() {
            self.add_course(NewCourse::from(course))
                .context(format!("seed course #{} ({})", idx + 1, course.code))?;
            summary.courses += 1;
        }

        for (idx, student) in seed.students.iter().enumerate() {
            self.add_student(student.id.clone(), &student.name)
                .context(format!("seed student #{} ({})", idx + 1, student.id))?;
            summary.students += 1;
        }

        info!(courses = summary.courses, students = summary.students, "Registry seeded");
        Ok(summary)
    }

    /// Resolves both (trimmed) keys to positions, student first.
    fn resolve(&self, student_id: &str, course_code: &str) -> Result<(usize, usize), RegistryError> {
        let (student_id, course_code) = (student_id.trim(), course_code.trim());
        let Some(&student) = self.student_index.get(student_id) else {
            warn!(student = student_id, "Unknown student");
            return Err(RegistryError::UnknownStudent { id: student_id.into(), context: None });
        };
        let Some(&course) = self.course_index.get(course_code) else {
            warn!(course = course_code, "Unknown course");
            return Err(RegistryError::UnknownCourse { code: course_code.into(), context: None });
        };
        Ok((student, course))
    }
}
