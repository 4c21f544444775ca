use registrar_domain::CourseCode;
use registrar_domain::config::SeedCourse;
use typed_builder::TypedBuilder;

/// Input for [`crate::Registry::add_course`].
///
/// ```rust
/// use registrar_enrollment::NewCourse;
///
/// let course = NewCourse::builder()
///     .code("CS101")
///     .title("Intro to Computer Science")
///     .capacity(30)
///     .schedule("Mon/Wed 9:00")
///     .build();
/// assert_eq!(course.capacity, 30);
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct NewCourse {
    #[builder(setter(into))]
    pub code: CourseCode,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(into))]
    pub description: String,
    pub capacity: usize,
    #[builder(default, setter(into))]
    pub schedule: String,
}

impl From<&SeedCourse> for NewCourse {
    fn from(seed: &SeedCourse) -> Self {
        Self {
            code: seed.code.clone(),
            title: seed.title.clone(),
            description: seed.description.clone(),
            capacity: seed.capacity,
            schedule: seed.schedule.clone(),
        }
    }
}

/// Seats taken versus seats offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub enrolled: usize,
    pub capacity: usize,
}

impl Occupancy {
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.enrolled >= self.capacity
    }
}

/// One row of the course listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseListing {
    pub code: CourseCode,
    pub title: String,
    pub enrolled: usize,
    pub capacity: usize,
}

impl CourseListing {
    #[must_use]
    pub const fn occupancy(&self) -> Occupancy {
        Occupancy { enrolled: self.enrolled, capacity: self.capacity }
    }
}

/// Result of a drop request for a known student and course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The pair existed and has been removed from both sides.
    Dropped,
    /// The student was not registered for the course; nothing changed.
    NotRegistered,
}

/// Counts of entities created by [`crate::Registry::seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub courses: usize,
    pub students: usize,
}
