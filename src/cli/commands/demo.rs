//! Run the built-in roster

use roster::config::RosterConfig;
use roster::core::models::Describe;
use roster::core::services::School;
use roster::output::{OutputMode, RosterReport};

/// Construct the built-in roster and print each entity in insertion order
pub fn demo(mode: OutputMode) -> anyhow::Result<()> {
    let school = School::new();
    let entities = RosterConfig::default().enroll(&school, None);
    log::debug!("constructed {} entities", entities.len());

    match mode {
        OutputMode::Human => {
            for entity in &entities {
                Describe::print_details(entity.as_ref())?;
            }
        },
        OutputMode::Json => RosterReport::from_entities(&entities).render(mode),
    }
    Ok(())
}
