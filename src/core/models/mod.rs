//! Domain models for roster
//!
//! Pure data structures; ids come from an injected [`IdGenerator`].
//!
//! - [`Person`] - Base entity with an id and a name
//! - [`Student`] - A person with a grade level
//! - [`StudentRecord`] - Standalone student with its own id counter
//! - [`Course`] - A course with its own id counter
//! - [`Describe`] - Labelled detail lines for any entity
//!
//! [`IdGenerator`]: crate::core::ports::IdGenerator

mod course;
mod describe;
mod person;
mod student;
mod student_record;

pub use course::Course;
pub use describe::{Describe, Detail};
pub use person::Person;
pub use student::Student;
pub use student_record::StudentRecord;
