//! Construct and print a roster

use std::path::Path;

use roster::config::{RosterConfig, Section};
use roster::core::services::School;
use roster::output::{OutputMode, RosterReport};

/// Construct the roster from `file` (or the built-in one) and render it
pub fn show(file: Option<&Path>, only: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let only = only.map(str::parse::<Section>).transpose()?;

    let config = match file {
        Some(path) => RosterConfig::load(path)?,
        None => RosterConfig::default(),
    };

    let school = School::new();
    let entities = config.enroll(&school, only);
    log::debug!("showing {} of {} entities", entities.len(), config.len());

    RosterReport::from_entities(&entities).render(mode);
    Ok(())
}
