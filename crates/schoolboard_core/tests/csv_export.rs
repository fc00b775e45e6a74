use chrono::NaiveDate;
use schoolboard_core::model::attendance::{AttendanceRecord, AttendanceStatus};
use schoolboard_core::model::grade::Grade;
use schoolboard_core::model::student::Student;
use schoolboard_core::{parse_csv, seed, to_csv, CsvRecord, ExportError};

#[test]
fn address_with_comma_survives_round_trip() {
    let mut student = Student::new("STU001", "John Doe", "john.doe@sjcsi.edu")
        .with_parent("Robert Doe", "+63 912 345 6789");
    student.address = "123 Main St, Manila".to_string();

    let csv = to_csv(std::slice::from_ref(&student)).unwrap();
    assert!(csv.contains("\"123 Main St, Manila\""));

    let back: Vec<Student> = parse_csv(&csv).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].address, "123 Main St, Manila");
    assert_eq!(back[0].to_row(), student.to_row());
}

#[test]
fn quotes_and_newlines_survive_round_trip() {
    let record = AttendanceRecord::new(
        "STU004",
        "Alice Brown",
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        AttendanceStatus::Excused,
    )
    .with_notes("Doctor said \"rest\",\nback Monday");

    let csv = to_csv(std::slice::from_ref(&record)).unwrap();
    let back: Vec<AttendanceRecord> = parse_csv(&csv).unwrap();
    assert_eq!(back[0].notes, record.notes);
    assert_eq!(back[0].subject, None);
}

#[test]
fn seeded_gradebook_reimports_field_for_field() {
    let grades = seed::grades();
    let csv = to_csv(&grades).unwrap();
    assert_eq!(csv.lines().next().unwrap(), Grade::HEADERS.join(","));

    let back: Vec<Grade> = parse_csv(&csv).unwrap();
    let rows: Vec<Vec<String>> = back.iter().map(CsvRecord::to_row).collect();
    let expected: Vec<Vec<String>> = grades.iter().map(CsvRecord::to_row).collect();
    assert_eq!(rows, expected);
}

#[test]
fn unparseable_date_is_reported_with_line() {
    let csv = "Student ID,Student Name,Date,Status,Subject,Notes\nSTU001,John Doe,15/01/2024,present,,\n";
    match parse_csv::<AttendanceRecord>(csv).unwrap_err() {
        ExportError::InvalidField { line, column, .. } => {
            assert_eq!(line, 2);
            assert_eq!(column, "Date");
        }
        other => panic!("unexpected error: {other}"),
    }
}
