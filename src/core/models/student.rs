//! Student model
//!
//! A student is a [`Person`] with a grade level. Its id comes from the person
//! counter, so students and plain persons share one id sequence.

use serde::Serialize;

use super::{Describe, Detail, Person};
use crate::core::ports::IdGenerator;

/// Role line appended after the grade level
const ROLE: &str = "Student";

/// A person enrolled at a grade level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    grade_level: String,
}

impl Student {
    /// Create a student, taking the next id from the person counter `ids`
    pub fn new(
        ids: &dyn IdGenerator,
        name: impl Into<String>,
        grade_level: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(ids, name),
            grade_level: grade_level.into(),
        }
    }

    /// The underlying person
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// The student's id
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.person.id()
    }

    /// The student's name
    #[must_use]
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// The student's grade level (e.g. "10th")
    #[must_use]
    pub fn grade_level(&self) -> &str {
        &self.grade_level
    }
}

impl Describe for Student {
    fn kind(&self) -> &'static str {
        "student"
    }

    fn id(&self) -> u64 {
        self.person.id()
    }

    fn detail_lines(&self) -> Vec<Detail> {
        let mut lines = self.person.detail_lines();
        lines.push(Detail::new("Grade Level", &self.grade_level));
        lines.push(Detail::new("Role", ROLE));
        lines
    }
}
