//! Course model
//!
//! A course is named once, at construction. There is no way to change its
//! name or id afterwards.

use serde::Serialize;

use super::{Describe, Detail};
use crate::core::ports::IdGenerator;

/// A course offered by the school
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    course_id: u64,
    course_name: String,
}

impl Course {
    /// Create a course, taking the next id from `ids`
    pub fn new(ids: &dyn IdGenerator, course_name: impl Into<String>) -> Self {
        let course_id = ids.next_id();
        let course_name = course_name.into();
        log::debug!("assigned course id {course_id} to {course_name:?}");
        Self {
            course_id,
            course_name,
        }
    }

    /// The course id
    #[must_use]
    pub const fn course_id(&self) -> u64 {
        self.course_id
    }

    /// The course name
    #[must_use]
    pub fn course_name(&self) -> &str {
        &self.course_name
    }
}

impl Describe for Course {
    fn kind(&self) -> &'static str {
        "course"
    }

    fn id(&self) -> u64 {
        self.course_id
    }

    fn detail_lines(&self) -> Vec<Detail> {
        vec![
            Detail::new("Course Name", &self.course_name),
            Detail::new("Course Id", &self.course_id),
        ]
    }
}
