//! Describe capability
//!
//! Every entity describes itself as an ordered list of `Label: value` lines.
//! Extensions (e.g. [`Student`](super::Student)) reproduce their base
//! entity's lines first, then append their own.

use std::io::{self, Write};

use serde::Serialize;

/// A single labelled detail line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    /// Field label (e.g. "Name")
    pub label: &'static str,
    /// Field value as displayed
    pub value: String,
}

impl Detail {
    /// Create a detail line
    #[must_use]
    pub fn new<T: ToString + ?Sized>(label: &'static str, value: &T) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for Detail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// An entity that can list and print its details
pub trait Describe {
    /// Short machine name of the entity kind (e.g. "student")
    fn kind(&self) -> &'static str;

    /// The entity id
    fn id(&self) -> u64;

    /// Ordered detail lines, one per field
    fn detail_lines(&self) -> Vec<Detail>;

    /// Write one `Label: value` line per detail to `out`
    fn display_details(&self, out: &mut dyn Write) -> io::Result<()> {
        for detail in self.detail_lines() {
            writeln!(out, "{detail}")?;
        }
        Ok(())
    }

    /// Print the details to standard output
    fn print_details(&self) -> io::Result<()> {
        self.display_details(&mut io::stdout().lock())
    }
}
