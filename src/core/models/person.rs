//! Person model
//!
//! The base entity: an id drawn from the person counter, and a name.

use serde::Serialize;

use super::{Describe, Detail};
use crate::core::ports::IdGenerator;

/// A person known to the school
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: u64,
    name: String,
}

impl Person {
    /// Create a person, taking the next id from `ids`
    ///
    /// The name is stored as given; empty names are accepted.
    pub fn new(ids: &dyn IdGenerator, name: impl Into<String>) -> Self {
        let id = ids.next_id();
        let name = name.into();
        log::debug!("assigned person id {id} to {name:?}");
        Self { id, name }
    }

    /// The person's id
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The person's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Describe for Person {
    fn kind(&self) -> &'static str {
        "person"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn detail_lines(&self) -> Vec<Detail> {
        vec![Detail::new("ID", &self.id), Detail::new("Name", &self.name)]
    }
}
