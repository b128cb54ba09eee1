//! School service - constructs entities from per-kind counters
//!
//! Persons and students share the person counter. Student records and
//! courses each have a counter of their own, so building one kind never
//! moves another kind's next id.

use crate::adapters::SequentialIds;
use crate::core::models::{Course, Person, Student, StudentRecord};
use crate::core::ports::IdGenerator;

/// The id counters a [`School`] owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Persons and students
    Person,
    /// Standalone student records
    StudentRecord,
    /// Courses
    Course,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person => write!(f, "person"),
            Self::StudentRecord => write!(f, "student_record"),
            Self::Course => write!(f, "course"),
        }
    }
}

/// Entity factory holding one id generator per [`EntityKind`]
pub struct School {
    people: Box<dyn IdGenerator>,
    student_records: Box<dyn IdGenerator>,
    courses: Box<dyn IdGenerator>,
}

impl std::fmt::Debug for School {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("School")
            .field("next_person_id", &self.people.peek())
            .field("next_student_record_id", &self.student_records.peek())
            .field("next_course_id", &self.courses.peek())
            .finish()
    }
}

impl Default for School {
    fn default() -> Self {
        Self::new()
    }
}

impl School {
    /// Create a school whose counters all start at 1
    #[must_use]
    pub fn new() -> Self {
        Self::with_generators(
            Box::new(SequentialIds::new()),
            Box::new(SequentialIds::new()),
            Box::new(SequentialIds::new()),
        )
    }

    /// Create a school from explicit generators
    #[must_use]
    pub fn with_generators(
        people: Box<dyn IdGenerator>,
        student_records: Box<dyn IdGenerator>,
        courses: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            people,
            student_records,
            courses,
        }
    }

    /// Construct a person
    pub fn person(&self, name: impl Into<String>) -> Person {
        Person::new(self.people.as_ref(), name)
    }

    /// Construct a person-based student
    pub fn student(&self, name: impl Into<String>, grade_level: impl Into<String>) -> Student {
        Student::new(self.people.as_ref(), name, grade_level)
    }

    /// Construct a standalone student record
    pub fn student_record(&self, name: impl Into<String>) -> StudentRecord {
        StudentRecord::new(self.student_records.as_ref(), name)
    }

    /// Construct a course
    pub fn course(&self, name: impl Into<String>) -> Course {
        Course::new(self.courses.as_ref(), name)
    }

    /// The id the next entity of `kind` will receive
    #[must_use]
    pub fn next_id(&self, kind: EntityKind) -> u64 {
        self.generator(kind).peek()
    }

    /// Rewind every counter to 1
    pub fn reset(&self) {
        for kind in [EntityKind::Person, EntityKind::StudentRecord, EntityKind::Course] {
            self.generator(kind).reset();
        }
        log::debug!("reset all id counters");
    }

    fn generator(&self, kind: EntityKind) -> &dyn IdGenerator {
        match kind {
            EntityKind::Person => self.people.as_ref(),
            EntityKind::StudentRecord => self.student_records.as_ref(),
            EntityKind::Course => self.courses.as_ref(),
        }
    }
}
