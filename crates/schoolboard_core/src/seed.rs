//! Demo data loaded when a board starts.
//!
//! Everything is built through the public constructors so seeded records pass
//! the same validation as user-entered ones. Attendance marks are dated on the
//! board's `today`; every other date is fixed.

use crate::model::alert::{Alert, AlertKind, Severity};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::grade::{Grade, GradeCategory};
use crate::model::student::Student;
use crate::model::teacher::Teacher;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Student roster.
pub fn students() -> Vec<Student> {
    let enrolled = date(2024, 6, 15);
    let mut roster = vec![
        Student::new("STU001", "John Doe", "john.doe@sjcsi.edu")
            .in_class("7", "A")
            .with_parent("Robert Doe", "+63 912 345 6789"),
        Student::new("STU002", "Jane Smith", "jane.smith@sjcsi.edu")
            .in_class("8", "B")
            .with_parent("Mary Smith", "+63 912 345 6790"),
        Student::new("STU003", "Bob Johnson", "bob.johnson@sjcsi.edu")
            .in_class("9", "A")
            .with_parent("David Johnson", "+63 912 345 6791"),
    ];
    let addresses = [
        "123 Main St, Manila",
        "456 Oak Ave, Quezon City",
        "789 Pine St, Makati",
    ];
    for (student, address) in roster.iter_mut().zip(addresses) {
        student.address = address.to_string();
        student.enrollment_date = enrolled;
    }
    roster
}

/// Faculty list.
pub fn teachers() -> Vec<Teacher> {
    let mut faculty = vec![
        Teacher::new("TCH001", "Mary Smith", "mary.smith@sjcsi.edu")
            .in_department("Mathematics")
            .teaching(["Algebra", "Geometry"], ["7A", "8B"]),
        Teacher::new("TCH002", "Dr. James Wilson", "james.wilson@sjcsi.edu")
            .in_department("Science")
            .teaching(["Biology", "Chemistry"], ["8A", "9A"]),
        Teacher::new("TCH003", "Sarah Johnson", "sarah.johnson@sjcsi.edu")
            .in_department("English")
            .teaching(["English Literature", "Creative Writing"], ["7B", "9B"]),
    ];
    let details = [
        ("+63 912 345 6789", date(2020, 8, 15)),
        ("+63 912 345 6790", date(2019, 6, 10)),
        ("+63 912 345 6791", date(2021, 1, 20)),
    ];
    for (teacher, (phone, hired)) in faculty.iter_mut().zip(details) {
        teacher.phone = phone.to_string();
        teacher.hire_date = hired;
    }
    faculty
}

/// Third-quarter gradebook.
pub fn grades() -> Vec<Grade> {
    vec![
        Grade::new("John Doe", "Mathematics", GradeCategory::Quiz, 85, 100, date(2024, 1, 15))
            .for_student_code("STU001"),
        Grade::new("Jane Smith", "Science", GradeCategory::Exam, 92, 100, date(2024, 1, 12))
            .for_student_code("STU002"),
        Grade::new("Bob Johnson", "English", GradeCategory::Project, 88, 100, date(2024, 1, 10))
            .for_student_code("STU003"),
        Grade::new("Alice Brown", "History", GradeCategory::Activity, 90, 100, date(2024, 1, 8))
            .for_student_code("STU004"),
    ]
}

/// Class 7A roster used by the attendance sheet.
pub fn attendance_roster() -> Vec<Student> {
    [
        ("STU001", "John Doe", "john.doe"),
        ("STU002", "Jane Smith", "jane.smith"),
        ("STU003", "Bob Johnson", "bob.johnson"),
        ("STU004", "Alice Brown", "alice.brown"),
        ("STU005", "Charlie Wilson", "charlie.wilson"),
        ("STU006", "Diana Davis", "diana.davis"),
        ("STU007", "Edward Miller", "edward.miller"),
    ]
    .into_iter()
    .map(|(code, name, mailbox)| {
        Student::new(code, name, format!("{mailbox}@sjcsi.edu")).in_class("7", "A")
    })
    .collect()
}

/// Attendance marks for `today`; STU006 and STU007 are unmarked.
pub fn attendance(today: NaiveDate) -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord::new("STU001", "John Doe", today, AttendanceStatus::Present),
        AttendanceRecord::new("STU002", "Jane Smith", today, AttendanceStatus::Present),
        AttendanceRecord::new("STU003", "Bob Johnson", today, AttendanceStatus::Late),
        AttendanceRecord::new("STU004", "Alice Brown", today, AttendanceStatus::Absent)
            .with_notes("Sick leave"),
        AttendanceRecord::new("STU005", "Charlie Wilson", today, AttendanceStatus::Present),
    ]
}

/// Alert inbox; one alert is already resolved.
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert::new(
            AlertKind::Academic,
            Severity::High,
            "Low Grade Alert",
            "Student has fallen below 75% average in Mathematics",
            date(2024, 1, 15),
        )
        .about("STU001", "John Doe"),
        Alert::new(
            AlertKind::Attendance,
            Severity::Medium,
            "Attendance Warning",
            "Student has been absent for 3 consecutive days",
            date(2024, 1, 14),
        )
        .about("STU002", "Jane Smith"),
        Alert::new(
            AlertKind::Behavioral,
            Severity::Low,
            "Late Submission",
            "Student submitted assignment 2 days late",
            date(2024, 1, 13),
        )
        .about("STU003", "Bob Johnson")
        .mark_resolved("Mary Smith", date(2024, 1, 14)),
        Alert::new(
            AlertKind::System,
            Severity::Critical,
            "Grade Calculation Error",
            "Error in calculating final grades for Grade 8A",
            date(2024, 1, 12),
        ),
        Alert::new(
            AlertKind::Academic,
            Severity::Medium,
            "Missing Assignments",
            "Student has 3 missing assignments in Science",
            date(2024, 1, 11),
        )
        .about("STU004", "Alice Brown"),
    ]
}
