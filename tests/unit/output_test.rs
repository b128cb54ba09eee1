//! Tests for the Output module
//!
//! Output renders entities either as detail lines or as JSON.

use roster::config::RosterConfig;
use roster::core::services::School;
use roster::output::{EntityReport, OutputMode, RosterReport};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// EntityReport Tests
// =============================================================================

#[test]
fn entity_report_captures_details() {
    let school = School::new();
    let student = school.student("Ana", "10th");

    let report = EntityReport::from_entity(&student);
    assert_eq!(report.kind, "student");
    assert_eq!(report.id, 1);
    assert_eq!(report.details.len(), 4);
    assert_eq!(report.details[3].value, "Student");
}

#[test]
fn entity_report_serialization() {
    let school = School::new();
    let report = EntityReport::from_entity(&school.course("Mathematics"));

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"kind\":\"course\""));
    assert!(json.contains("\"id\":1"));
    assert!(json.contains("{\"label\":\"Course Name\",\"value\":\"Mathematics\"}"));
}

// =============================================================================
// RosterReport Tests
// =============================================================================

#[test]
fn roster_report_human_lines() {
    let school = School::new();
    let entities = RosterConfig::default().enroll(&school, None);
    let report = RosterReport::from_entities(&entities);

    assert_eq!(
        report.human_lines(),
        vec![
            "ID: 1",
            "Name: Ana",
            "Grade Level: 10th",
            "Role: Student",
            "ID: 2",
            "Name: Ben",
            "Grade Level: 11th",
            "Role: Student",
            "Name: Raki",
            "Student Id: 1",
            "Name: Raki2",
            "Student Id: 2",
            "Course Name: Mathematics",
            "Course Id: 1",
            "Course Name: Science",
            "Course Id: 2",
        ]
    );
}

#[test]
fn roster_report_serialization() {
    let report = RosterReport::from_entities(&[]);

    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(json, "{\"entities\":[]}");
}
