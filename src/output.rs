//! Output formatting for human and JSON modes
//!
//! Entities are rendered either as their `Label: value` detail lines or as a
//! machine-parseable JSON document.

use serde::Serialize;

use crate::core::models::{Describe, Detail};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One entity as reported
#[derive(Debug, Clone, Serialize)]
pub struct EntityReport {
    /// Entity kind (e.g. "student", "course")
    pub kind: &'static str,
    /// Entity id
    pub id: u64,
    /// Detail lines in display order
    pub details: Vec<Detail>,
}

impl EntityReport {
    /// Capture an entity's kind, id and details
    #[must_use]
    pub fn from_entity(entity: &dyn Describe) -> Self {
        Self {
            kind: entity.kind(),
            id: entity.id(),
            details: entity.detail_lines(),
        }
    }
}

/// Result of displaying a roster
#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    /// Entities in insertion order
    pub entities: Vec<EntityReport>,
}

impl RosterReport {
    /// Build a report from constructed entities
    #[must_use]
    pub fn from_entities(entities: &[Box<dyn Describe>]) -> Self {
        Self {
            entities: entities.iter().map(|e| EntityReport::from_entity(e.as_ref())).collect(),
        }
    }

    /// The human-readable lines, one detail per line
    #[must_use]
    pub fn human_lines(&self) -> Vec<String> {
        self.entities
            .iter()
            .flat_map(|e| e.details.iter().map(ToString::to_string))
            .collect()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.entities.is_empty() {
            println!("Roster is empty.");
            return;
        }

        for line in self.human_lines() {
            println!("{line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
