use chrono::NaiveDate;
use schoolboard_core::board::DashboardSummary;
use schoolboard_core::model::attendance::AttendanceStatus;
use schoolboard_core::model::student::{Student, StudentPatch};
use schoolboard_core::{
    BoardError, CurrentUser, RecordKind, Role, SchoolBoard, Screen, Settings, StoreError,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn board(name: &str, role: Role) -> SchoolBoard {
    SchoolBoard::seeded(CurrentUser::new(name, role), Settings::default(), today()).unwrap()
}

#[test]
fn admin_dashboard_reflects_seeded_screens() {
    let board = board("Administrator", Role::Admin);
    let DashboardSummary::Admin(home) = board.dashboard() else {
        panic!("admin should get the admin dashboard");
    };

    assert_eq!(home.total_students, 3);
    assert_eq!(home.active_teachers, 3);
    assert_eq!(home.grades.count, 4);
    assert!((home.grades.average_percent - 88.75).abs() < 1e-9);
    assert_eq!(home.grades.passing, 4);
    assert_eq!(home.grades.honor_roll, 2);
    assert_eq!(home.attendance_today.present, 3);
    assert_eq!(home.attendance_today.total(), 5);
    assert_eq!(home.alerts.unresolved, 4);
    assert_eq!(home.alerts.critical_unresolved, 1);
}

#[test]
fn teacher_dashboard_uses_assigned_classes() {
    let mut board = board("Mary Smith", Role::Teacher);
    for code in ["STU006", "STU007"] {
        board
            .attendance_mut()
            .mark(code, today(), AttendanceStatus::Present)
            .unwrap();
    }

    let DashboardSummary::Teacher(home) = board.dashboard() else {
        panic!("teacher should get the teacher dashboard");
    };
    assert_eq!(home.classes, vec!["7A", "8B"]);
    assert_eq!(home.students_in_classes, 2);
    assert_eq!(home.class_attendance[0], ("7A".to_string(), 71));
    assert_eq!(home.class_attendance[1], ("8B".to_string(), 0));
}

#[test]
fn parent_dashboard_lists_own_children() {
    let board = board("Mary Smith", Role::Parent);
    let DashboardSummary::Parent(home) = board.dashboard() else {
        panic!("parent should get the parent dashboard");
    };

    assert_eq!(home.children.len(), 1);
    let child = &home.children[0];
    assert_eq!(child.student_code, "STU002");
    assert_eq!(child.class_label, "8B");
    assert!((child.average_percent - 92.0).abs() < 1e-9);
    assert_eq!(child.attendance_rate, 100);
    assert_eq!(child.open_alerts, 1);
}

#[test]
fn navigation_follows_role() {
    let parent = board("Robert Doe", Role::Parent);
    let labels: Vec<&str> = parent.navigation().iter().map(|item| item.label).collect();
    assert_eq!(
        labels,
        vec!["Dashboard", "My Children", "Grades", "Attendance", "Reports"]
    );
    assert!(!parent.can_open(Screen::Settings));
    assert!(board("Administrator", Role::Admin).can_open(Screen::Settings));
}

#[test]
fn invalid_update_surfaces_and_leaves_roster_unchanged() {
    let mut board = board("Administrator", Role::Admin);
    let before = board.students().all();
    let id = before[0].id;

    let err = board
        .students_mut()
        .update(
            id,
            &StudentPatch {
                email: Some("not-an-email".to_string()),
                ..StudentPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let err = board
        .students_mut()
        .add(Student::new("", "Nameless", "nameless@sjcsi.edu"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(board.students().all(), before);
}

#[test]
fn invalid_settings_update_keeps_previous_settings() {
    let mut board = board("Administrator", Role::Admin);
    let mut settings = board.settings().clone();
    settings.general.academic_year = "2025".to_string();

    assert!(matches!(
        board.update_settings(settings).unwrap_err(),
        BoardError::Settings(_)
    ));
    assert_eq!(board.settings().general.academic_year, "2024-2025");
}

#[test]
fn export_names_file_by_kind_and_date() {
    let board = board("Administrator", Role::Admin);
    let (file_name, body) = board.export(RecordKind::Attendance).unwrap();
    assert_eq!(file_name, "attendance-2024-01-15.csv");
    assert_eq!(body.lines().count(), 6);
    assert!(body.contains("Sick leave"));
}
