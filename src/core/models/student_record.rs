//! Standalone student record
//!
//! Unlike [`Student`](super::Student), a record is not a person: it draws its
//! id from a counter of its own and lists its name before its id.

use serde::Serialize;

use super::{Describe, Detail};
use crate::core::ports::IdGenerator;

/// A student known only by name and student id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    student_id: u64,
    name: String,
}

impl StudentRecord {
    /// Create a record, taking the next id from `ids`
    pub fn new(ids: &dyn IdGenerator, name: impl Into<String>) -> Self {
        let student_id = ids.next_id();
        let name = name.into();
        log::debug!("assigned student id {student_id} to {name:?}");
        Self { student_id, name }
    }

    /// The student id
    #[must_use]
    pub const fn student_id(&self) -> u64 {
        self.student_id
    }

    /// The student's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Describe for StudentRecord {
    fn kind(&self) -> &'static str {
        "student_record"
    }

    fn id(&self) -> u64 {
        self.student_id
    }

    fn detail_lines(&self) -> Vec<Detail> {
        vec![Detail::new("Name", &self.name), Detail::new("Student Id", &self.student_id)]
    }
}
