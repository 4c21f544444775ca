use strum_macros::{EnumIter, EnumString};

/// One entry of the main menu.
///
/// Parsed from the operator's answer: the entry number, or a word alias, case-insensitive.
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum MenuChoice {
    #[strum(serialize = "1", serialize = "add-course")]
    AddCourse,
    #[strum(serialize = "2", serialize = "add-student")]
    AddStudent,
    #[strum(serialize = "3", serialize = "list")]
    ListCourses,
    #[strum(serialize = "4", serialize = "register")]
    Register,
    #[strum(serialize = "5", serialize = "drop")]
    Drop,
    #[strum(serialize = "6", serialize = "course")]
    CourseDetails,
    #[strum(serialize = "7", serialize = "student")]
    StudentDetails,
    #[strum(serialize = "0", serialize = "exit", serialize = "quit")]
    Exit,
}

impl MenuChoice {
    /// The number shown in front of the entry.
    #[must_use]
    pub const fn key(self) -> u8 {
        match self {
            Self::AddCourse => 1,
            Self::AddStudent => 2,
            Self::ListCourses => 3,
            Self::Register => 4,
            Self::Drop => 5,
            Self::CourseDetails => 6,
            Self::StudentDetails => 7,
            Self::Exit => 0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddCourse => "Add Course",
            Self::AddStudent => "Add Student",
            Self::ListCourses => "Display Course Listing",
            Self::Register => "Register Student for Course",
            Self::Drop => "Drop Course for Student",
            Self::CourseDetails => "Show Course Details",
            Self::StudentDetails => "Show Student Details",
            Self::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn numbers_and_aliases_parse() {
        assert_eq!("1".parse(), Ok(MenuChoice::AddCourse));
        assert_eq!("5".parse(), Ok(MenuChoice::Drop));
        assert_eq!("0".parse(), Ok(MenuChoice::Exit));
        assert_eq!("QUIT".parse(), Ok(MenuChoice::Exit));
        assert_eq!("Register".parse(), Ok(MenuChoice::Register));
    }

    #[test]
    fn unknown_answers_are_rejected() {
        for answer in ["", "8", "-1", "add", "1 2"] {
            assert!(answer.parse::<MenuChoice>().is_err(), "{answer:?} should not parse");
        }
    }

    #[test]
    fn keys_round_trip_through_parsing() {
        for choice in MenuChoice::iter() {
            assert_eq!(choice.key().to_string().parse(), Ok(choice));
        }
        assert_eq!(MenuChoice::iter().last(), Some(MenuChoice::Exit));
    }
}
