use chrono::NaiveDate;
use schoolboard_core::filter::{AlertFilter, AttendanceFilter, Resolution};
use schoolboard_core::model::alert::Severity;
use schoolboard_core::model::attendance::{AttendanceRecord, AttendanceStatus};
use schoolboard_core::model::grade::{Grade, GradeCategory};
use schoolboard_core::model::student::Student;
use schoolboard_core::seed;
use schoolboard_core::service::AlertService;
use schoolboard_core::summary::{
    attendance_rate, count_matching, format_percent, AlertSummary, AttendanceTally,
};
use schoolboard_core::RecordStore;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn critical_unresolved_filter_finds_the_one_seeded_alert() {
    let store = RecordStore::from_records(seed::alerts()).unwrap();
    let severities: Vec<Severity> = store.iter().map(|alert| alert.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::High,
            Severity::Medium,
            Severity::Low,
            Severity::Critical,
            Severity::Medium
        ]
    );

    let filter = AlertFilter {
        severity: Some(Severity::Critical),
        resolution: Some(Resolution::Unresolved),
        ..AlertFilter::default()
    };
    let view = store.derive(&filter);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].title, "Grade Calculation Error");
    assert_eq!(store.len(), 5);
}

#[test]
fn seeded_alert_summary_counts() {
    let service = AlertService::from_records(seed::alerts()).unwrap();
    let summary: AlertSummary = service.summary();
    assert_eq!(summary.total, 5);
    assert_eq!(summary.unresolved, 4);
    assert_eq!(summary.critical_unresolved, 1);
    assert_eq!(
        summary.unresolved_by_kind.values().sum::<usize>(),
        summary.unresolved
    );
}

#[test]
fn five_student_class_with_three_present_is_sixty_percent() {
    let roster: Vec<Student> = ["STU001", "STU002", "STU003", "STU004", "STU005"]
        .iter()
        .map(|code| {
            Student::new(*code, format!("Student {code}"), format!("{}@sjcsi.edu", code.to_lowercase()))
                .in_class("7", "A")
        })
        .collect();
    let statuses = [
        AttendanceStatus::Present,
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
        AttendanceStatus::Present,
    ];
    let mut records: Vec<AttendanceRecord> = roster
        .iter()
        .zip(statuses)
        .map(|(student, status)| {
            AttendanceRecord::new(student.student_code.clone(), student.name.clone(), day(15), status)
        })
        .collect();
    records.push(AttendanceRecord::new(
        "STU001",
        "Student STU001",
        day(16),
        AttendanceStatus::Absent,
    ));

    assert_eq!(attendance_rate(&records, &roster, "7A", day(15)), 60);
    assert_eq!(attendance_rate(&records, &roster, "8B", day(15)), 0);

    let tally = AttendanceTally::for_date(&records, day(15));
    assert_eq!((tally.present, tally.late, tally.absent), (3, 1, 1));
    assert_eq!(tally.total(), 5);

    let absent = AttendanceFilter {
        status: Some(AttendanceStatus::Absent),
        ..AttendanceFilter::on(day(15))
    };
    assert_eq!(count_matching(&records, &absent), 1);
}

#[test]
fn grade_percentages_render_with_one_decimal() {
    let grade = Grade::new("John Doe", "Mathematics", GradeCategory::Quiz, 85, 100, day(15));
    assert_eq!(format_percent(grade.percentage()), "85.0%");

    let empty = Grade::new("John Doe", "Mathematics", GradeCategory::Quiz, 0, 0, day(15));
    assert_eq!(empty.percentage(), 0.0);
    assert_eq!(format_percent(empty.percentage()), "0.0%");
}
