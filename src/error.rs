//! Error types for roster
//!
//! Building and describing entities cannot fail. Errors only come from the
//! layers around them: reading roster files and parsing CLI filters.

use std::path::PathBuf;

/// Errors raised while loading or selecting roster data
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The roster file could not be read
    #[error("failed to read roster file {}: {source}", .path.display())]
    Read {
        /// Path of the roster file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The roster file is not valid TOML for a roster
    #[error("invalid roster file {}: {source}", .path.display())]
    Parse {
        /// Path of the roster file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Inline roster text is not valid TOML for a roster
    #[error("invalid roster: {0}")]
    Toml(#[from] toml::de::Error),

    /// A section name that is not part of a roster
    #[error("Invalid section: {0}. Use: people, students, records, courses")]
    UnknownSection(String),
}
