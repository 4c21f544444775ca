use crate::error::ShellError;
use crate::menu::MenuChoice;
use registrar::domain::config::ShellConfig;
use registrar::enrollment::{DropOutcome, NewCourse, Registry, RegistryError};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use strum::IntoEnumIterator;
use tracing::{debug, info};

const BANNER: &str = "Registrar: course registration manager";
const FAREWELL: &str = "Exiting. Thank you!";

/// Outcome of a single command: keep going, or stop because the input ran dry.
type Step = Result<ControlFlow<()>, ShellError>;

/// Reads one prompted line or ends the command when input is exhausted.
macro_rules! ask {
    ($shell:expr, $prompt:expr) => {
        match $shell.prompt($prompt)? {
            Some(answer) => answer,
            None => return Ok(ControlFlow::Break(())),
        }
    };
}

/// The menu loop.
///
/// Every answer is read as one line and trimmed. End of input at any prompt ends the
/// session the same way the exit entry does.
#[derive(Debug)]
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub const fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self { input, output, config }
    }

    /// Runs commands against `registry` until the operator exits or input ends.
    ///
    /// # Errors
    /// Returns [`ShellError::Io`] if the terminal cannot be read or written. Registry
    /// rejections are printed and never end the session.
    pub fn run(&mut self, registry: &mut Registry) -> Result<(), ShellError> {
        info!("Shell session started");
        if self.config.banner {
            writeln!(self.output, "{BANNER}")?;
        }

        loop {
            if self.config.show_menu {
                self.render_menu()?;
            }
            let Some(answer) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let Ok(choice) = answer.parse::<MenuChoice>() else {
                debug!(answer = %answer, "Unrecognised menu choice");
                writeln!(self.output, "Invalid choice. Please choose a valid option.")?;
                continue;
            };
            debug!(?choice, "Menu command");

            let step = match choice {
                MenuChoice::AddCourse => self.add_course(registry),
                MenuChoice::AddStudent => self.add_student(registry),
                MenuChoice::ListCourses => self.list_courses(registry),
                MenuChoice::Register => self.register(registry),
                MenuChoice::Drop => self.drop_course(registry),
                MenuChoice::CourseDetails => self.course_details(registry),
                MenuChoice::StudentDetails => self.student_details(registry),
                MenuChoice::Exit => Ok(ControlFlow::Break(())),
            }?;

            if step.is_break() {
                break;
            }
        }

        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;
        info!("Shell session ended");
        Ok(())
    }

    fn render_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\nMenu:")?;
        for choice in MenuChoice::iter() {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Prints `prompt` and reads one line. `None` means end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn add_course(&mut self, registry: &mut Registry) -> Step {
        writeln!(self.output, "\nAdding Course:")?;
        let code = ask!(self, "Enter Course Code: ");
        let title = ask!(self, "Enter Course Title: ");
        let description = ask!(self, "Enter Course Description: ");
        let raw_capacity = ask!(self, "Enter Capacity: ");

        let Ok(capacity) = raw_capacity.parse::<usize>() else {
            writeln!(
                self.output,
                "Invalid capacity '{raw_capacity}': expected a whole number. Course not added."
            )?;
            return Ok(ControlFlow::Continue(()));
        };
        let schedule = ask!(self, "Enter Schedule: ");

        let course = NewCourse::builder()
            .code(code)
            .title(title)
            .description(description)
            .capacity(capacity)
            .schedule(schedule)
            .build();

        match registry.add_course(course) {
            Ok(_) => writeln!(self.output, "Course added successfully!")?,
            Err(err) => writeln!(self.output, "Course not added: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn add_student(&mut self, registry: &mut Registry) -> Step {
        writeln!(self.output, "\nAdding Student:")?;
        let id = ask!(self, "Enter Student ID: ");
        let name = ask!(self, "Enter Student Name: ");

        match registry.add_student(id, name) {
            Ok(_) => writeln!(self.output, "Student added successfully!")?,
            Err(err) => writeln!(self.output, "Student not added: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn list_courses(&mut self, registry: &Registry) -> Step {
        writeln!(self.output, "\nCourse Listing:")?;
        let listing = registry.list_courses();
        if listing.is_empty() {
            writeln!(self.output, "No courses yet.")?;
        }
        for row in listing {
            writeln!(
                self.output,
                "{} - {} | Capacity: {}/{}",
                row.code, row.title, row.enrolled, row.capacity
            )?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn register(&mut self, registry: &mut Registry) -> Step {
        writeln!(self.output, "\nRegistering Student for Course:")?;
        let id = ask!(self, "Enter Student ID: ");
        let code = ask!(self, "Enter Course Code: ");

        let outcome = registry.register(&id, &code);
        let (name, title) = names(registry, &id, &code);
        match outcome {
            Ok(seats) => writeln!(
                self.output,
                "Student {name} enrolled in {title} ({}/{})",
                seats.enrolled, seats.capacity
            )?,
            Err(err) if err.is_not_found() => {
                writeln!(self.output, "Invalid Student ID or Course Code. Registration failed.")?;
            },
            Err(RegistryError::CapacityExceeded { .. }) => {
                writeln!(self.output, "Course {title} is full. Cannot enroll more students.")?;
            },
            Err(RegistryError::AlreadyRegistered { .. }) => {
                writeln!(self.output, "Student {name} is already registered for {title}.")?;
            },
            Err(err) => writeln!(self.output, "Registration failed: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn drop_course(&mut self, registry: &mut Registry) -> Step {
        writeln!(self.output, "\nDropping Course for Student:")?;
        let id = ask!(self, "Enter Student ID: ");
        let code = ask!(self, "Enter Course Code: ");

        let outcome = registry.drop_course(&id, &code);
        let (name, title) = names(registry, &id, &code);
        match outcome {
            Ok(DropOutcome::Dropped) => writeln!(self.output, "Student {name} removed from {title}")?,
            Ok(DropOutcome::NotRegistered) => {
                writeln!(self.output, "Student {name} is not registered for {title}. Nothing to drop.")?;
            },
            Err(err) if err.is_not_found() => {
                writeln!(self.output, "Invalid Student ID or Course Code. Dropping failed.")?;
            },
            Err(err) => writeln!(self.output, "Dropping failed: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn course_details(&mut self, registry: &Registry) -> Step {
        let code = ask!(self, "Enter Course Code: ");
        let (Some(course), Some(roster)) = (registry.find_course(&code), registry.roster(&code))
        else {
            writeln!(self.output, "No course with code '{code}'.")?;
            return Ok(ControlFlow::Continue(()));
        };

        writeln!(self.output, "\n{} - {}", course.code(), course.title())?;
        writeln!(self.output, "Description: {}", course.description())?;
        writeln!(self.output, "Schedule: {}", course.schedule())?;
        writeln!(self.output, "Enrolled: {}/{}", roster.len(), course.capacity())?;
        if roster.is_empty() {
            writeln!(self.output, "Roster: (empty)")?;
            return Ok(ControlFlow::Continue(()));
        }
        writeln!(self.output, "Roster:")?;
        for id in roster {
            let name = registry.find_student(id.as_str()).map_or("?", |s| s.name());
            writeln!(self.output, "  {id} - {name}")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn student_details(&mut self, registry: &Registry) -> Step {
        let id = ask!(self, "Enter Student ID: ");
        let (Some(student), Some(courses)) =
            (registry.find_student(&id), registry.registered_courses(&id))
        else {
            writeln!(self.output, "No student with ID '{id}'.")?;
            return Ok(ControlFlow::Continue(()));
        };

        writeln!(self.output, "\n{} - {}", student.id(), student.name())?;
        if courses.is_empty() {
            writeln!(self.output, "Registered courses: (none)")?;
            return Ok(ControlFlow::Continue(()));
        }
        writeln!(self.output, "Registered courses:")?;
        for code in courses {
            let title = registry.find_course(code.as_str()).map_or("?", |c| c.title());
            writeln!(self.output, "  {code} - {title}")?;
        }
        Ok(ControlFlow::Continue(()))
    }
}

/// Display names for a student/course pair, falling back to the keys as typed.
fn names<'a>(registry: &'a Registry, id: &'a str, code: &'a str) -> (&'a str, &'a str) {
    let name = registry.find_student(id).map_or(id, |s| s.name());
    let title = registry.find_course(code).map_or(code, |c| c.title());
    (name, title)
}
