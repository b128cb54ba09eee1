//! Roster configuration
//!
//! A roster lists the entities to construct, section by section:
//!
//! ```toml
//! [[people]]
//! name = "Dana"
//!
//! [[students]]
//! name = "Ana"
//! grade_level = "10th"
//!
//! [[records]]
//! name = "Raki"
//!
//! [[courses]]
//! name = "Mathematics"
//! ```
//!
//! Missing sections are empty. Entities are constructed in section order
//! (people, students, records, courses) and in file order within a section.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::RosterError;
use crate::core::models::Describe;
use crate::core::services::School;

/// Entities to construct, grouped by section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// Plain persons
    #[serde(default)]
    pub people: Vec<PersonEntry>,
    /// Person-based students
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    /// Standalone student records
    #[serde(default)]
    pub records: Vec<RecordEntry>,
    /// Courses
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
}

/// A person to construct
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonEntry {
    /// Person name
    pub name: String,
}

/// A person-based student to construct
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentEntry {
    /// Student name
    pub name: String,
    /// Grade level (e.g. "10th")
    pub grade_level: String,
}

/// A standalone student record to construct
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordEntry {
    /// Student name
    pub name: String,
}

/// A course to construct
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseEntry {
    /// Course name
    pub name: String,
}

/// Roster sections, usable as a display filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `[[people]]`
    People,
    /// `[[students]]`
    Students,
    /// `[[records]]`
    Records,
    /// `[[courses]]`
    Courses,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::People => write!(f, "people"),
            Self::Students => write!(f, "students"),
            Self::Records => write!(f, "records"),
            Self::Courses => write!(f, "courses"),
        }
    }
}

impl std::str::FromStr for Section {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "people" => Ok(Self::People),
            "students" => Ok(Self::Students),
            "records" => Ok(Self::Records),
            "courses" => Ok(Self::Courses),
            _ => Err(RosterError::UnknownSection(s.to_string())),
        }
    }
}

impl Default for RosterConfig {
    /// The built-in demo roster
    fn default() -> Self {
        Self {
            people: Vec::new(),
            students: vec![student("Ana", "10th"), student("Ben", "11th")],
            records: vec![record("Raki"), record("Raki2")],
            courses: vec![course("Mathematics"), course("Science")],
        }
    }
}

impl RosterConfig {
    /// Load a roster from a TOML file
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let content = fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| RosterError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded roster from {}", path.display());
        Ok(config)
    }

    /// Parse a roster from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, RosterError> {
        Ok(toml::from_str(content)?)
    }

    /// Number of entities in the roster
    #[must_use]
    pub const fn len(&self) -> usize {
        self.people.len() + self.students.len() + self.records.len() + self.courses.len()
    }

    /// Whether the roster has no entities at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Construct every entity of the roster, in order
    ///
    /// Every section is constructed so ids stay the same whatever `only`
    /// selects; `only` just limits which entities are returned.
    #[must_use]
    pub fn enroll(&self, school: &School, only: Option<Section>) -> Vec<Box<dyn Describe>> {
        let sections: Vec<(Section, Vec<Box<dyn Describe>>)> = vec![
            (
                Section::People,
                self.people.iter().map(|p| boxed(school.person(p.name.as_str()))).collect(),
            ),
            (
                Section::Students,
                self.students
                    .iter()
                    .map(|s| boxed(school.student(s.name.as_str(), s.grade_level.as_str())))
                    .collect(),
            ),
            (
                Section::Records,
                self.records
                    .iter()
                    .map(|r| boxed(school.student_record(r.name.as_str())))
                    .collect(),
            ),
            (
                Section::Courses,
                self.courses.iter().map(|c| boxed(school.course(c.name.as_str()))).collect(),
            ),
        ];

        sections
            .into_iter()
            .filter(|(section, _)| only.is_none_or(|o| o == *section))
            .flat_map(|(_, entities)| entities)
            .collect()
    }
}

fn boxed(entity: impl Describe + 'static) -> Box<dyn Describe> {
    Box::new(entity)
}

fn student(name: &str, grade_level: &str) -> StudentEntry {
    StudentEntry {
        name: name.to_string(),
        grade_level: grade_level.to_string(),
    }
}

fn record(name: &str) -> RecordEntry {
    RecordEntry {
        name: name.to_string(),
    }
}

fn course(name: &str) -> CourseEntry {
    CourseEntry {
        name: name.to_string(),
    }
}
