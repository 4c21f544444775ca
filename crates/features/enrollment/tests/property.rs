use proptest::prelude::*;
use registrar_enrollment::{DropOutcome, NewCourse, Registry, RegistryError};

const STUDENTS: [&str; 5] = ["S1", "S2", "S3", "S4", "S5"];
const COURSES: [(&str, usize); 3] = [("CS101", 1), ("MA201", 2), ("PH110", 3)];

#[derive(Debug, Clone)]
enum Op {
    Register(usize, usize),
    Drop(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..STUDENTS.len(), 0..COURSES.len()).prop_map(|(s, c)| Op::Register(s, c)),
        (0..STUDENTS.len(), 0..COURSES.len()).prop_map(|(s, c)| Op::Drop(s, c)),
    ]
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    for (code, capacity) in COURSES {
        registry
            .add_course(NewCourse::builder().code(code).title(code).capacity(capacity).build())
            .unwrap();
    }
    for id in STUDENTS {
        registry.add_student(id, id).unwrap();
    }
    registry
}

fn assert_invariants(registry: &Registry) -> Result<(), TestCaseError> {
    for course in registry.courses() {
        let roster = registry.roster(course.code().as_str()).unwrap();
        prop_assert!(roster.len() <= course.capacity());

        for student in roster {
            let courses = registry.registered_courses(student.as_str()).unwrap();
            prop_assert!(courses.contains(course.code()));
        }
    }
    for student in registry.students() {
        for code in registry.registered_courses(student.id().as_str()).unwrap() {
            let roster = registry.roster(code.as_str()).unwrap();
            prop_assert!(roster.contains(student.id()));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn capacity_and_symmetry_hold_after_every_operation(ops in proptest::collection::vec(op(), 0..64)) {
        let mut registry = registry();

        for op in ops {
            match op {
                Op::Register(s, c) => {
                    let before = registry.ledger().clone();
                    match registry.register(STUDENTS[s], COURSES[c].0) {
                        Ok(seats) => prop_assert!(seats.enrolled <= seats.capacity),
                        Err(RegistryError::CapacityExceeded { .. } | RegistryError::AlreadyRegistered { .. }) => {
                            prop_assert_eq!(registry.ledger(), &before);
                        },
                        Err(other) => prop_assert!(false, "unexpected error: {other}"),
                    }
                },
                Op::Drop(s, c) => {
                    let was_registered = registry.ledger().is_registered(STUDENTS[s], COURSES[c].0);
                    let outcome = registry.drop_course(STUDENTS[s], COURSES[c].0).unwrap();
                    prop_assert_eq!(outcome == DropOutcome::Dropped, was_registered);
                    prop_assert!(!registry.ledger().is_registered(STUDENTS[s], COURSES[c].0));
                },
            }
            assert_invariants(&registry)?;
        }
    }
}
