//! Tests for entity detail display
//!
//! Parameterized with test-case over names and values.

use roster::core::models::{Describe, Detail};
use roster::core::services::School;
use test_case::test_case;

fn rendered(entity: &dyn Describe) -> String {
    let mut out = Vec::new();
    entity.display_details(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Formats
// =============================================================================

#[test_case("Ana", "10th" ; "ana tenth grade")]
#[test_case("Ben", "11th" ; "ben eleventh grade")]
#[test_case("", "" ; "empty fields")]
fn test_student_display_format(name: &str, grade: &str) {
    let school = School::new();
    let student = school.student(name, grade);

    assert_eq!(
        rendered(&student),
        format!("ID: 1\nName: {name}\nGrade Level: {grade}\nRole: Student\n")
    );
}

#[test_case("Raki" ; "simple name")]
#[test_case("Mary Ann" ; "name with space")]
fn test_student_record_display_format(name: &str) {
    let school = School::new();
    let record = school.student_record(name);

    assert_eq!(rendered(&record), format!("Name: {name}\nStudent Id: 1\n"));
}

#[test]
fn test_person_display_format() {
    let school = School::new();
    let person = school.person("Dana");

    assert_eq!(rendered(&person), "ID: 1\nName: Dana\n");
}

#[test]
fn test_course_display_format() {
    let school = School::new();
    let maths = school.course("Mathematics");
    let science = school.course("Science");

    assert_eq!(rendered(&maths), "Course Name: Mathematics\nCourse Id: 1\n");
    assert_eq!(rendered(&science), "Course Name: Science\nCourse Id: 2\n");
}

// =============================================================================
// Extension Behavior
// =============================================================================

#[test]
fn test_student_output_starts_with_person_output() {
    let school = School::new();
    let student = school.student("Ana", "10th");

    let base = rendered(student.person());
    let full = rendered(&student);
    assert!(full.starts_with(&base));
    assert_eq!(&full[base.len()..], "Grade Level: 10th\nRole: Student\n");
}

#[test]
fn test_scenario_two_students_in_order() {
    let school = School::new();
    let students = [school.student("Ana", "10th"), school.student("Ben", "11th")];

    let mut out = Vec::new();
    for student in &students {
        student.display_details(&mut out).unwrap();
    }

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "ID: 1\nName: Ana\nGrade Level: 10th\nRole: Student\n\
         ID: 2\nName: Ben\nGrade Level: 11th\nRole: Student\n"
    );
}

#[test]
fn test_detail_lines_and_kinds() {
    let school = School::new();
    let course = school.course("Science");

    assert_eq!(course.kind(), "course");
    assert_eq!(Describe::id(&course), 1);
    assert_eq!(
        course.detail_lines(),
        vec![Detail::new("Course Name", "Science"), Detail::new("Course Id", &1)]
    );
    assert_eq!(school.student("Ana", "10th").kind(), "student");
    assert_eq!(school.student_record("Raki").kind(), "student_record");
    assert_eq!(school.person("Dana").kind(), "person");
}

#[test]
fn test_detail_display() {
    assert_eq!(Detail::new("Grade Level", "12th").to_string(), "Grade Level: 12th");
}

#[test]
fn test_detail_new_accepts_numbers_and_text() {
    assert_eq!(Detail::new("Course Id", &42_u64).value, "42");
    assert_eq!(Detail::new("Role", "Student").value, "Student");
    assert_eq!(Detail::new("Name", &String::from("Ana")).value, "Ana");
}

#[test]
fn test_print_details_writes_to_stdout() {
    let school = School::new();
    assert!(school.student("Ana", "10th").print_details().is_ok());
    assert!(school.course("Science").print_details().is_ok());
}
