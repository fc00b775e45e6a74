//! Per-screen predicate sets.

use crate::filter::{choice_matches, RecordFilter, TextQuery};
use crate::label::labelled_enum;
use crate::model::alert::{Alert, AlertKind, Severity};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::grade::{Grade, GradeCategory};
use crate::model::student::Student;
use crate::model::teacher::Teacher;
use crate::role::{CurrentUser, Role};
use chrono::NaiveDate;

labelled_enum! {
    /// Resolved-state selector for alerts.
    pub enum Resolution {
        Resolved => "resolved",
        Unresolved => "unresolved",
    }
}

impl Resolution {
    pub fn matches(self, resolved: bool) -> bool {
        match self {
            Self::Resolved => resolved,
            Self::Unresolved => !resolved,
        }
    }
}

/// Student roster filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    /// Searches name, student code and email.
    pub search: TextQuery,
    /// Exact year level, e.g. `7`.
    pub grade_level: Option<String>,
    /// Exact class label, e.g. `7A` (case-insensitive).
    pub class_label: Option<String>,
}

impl StudentFilter {
    /// Roster of one class.
    pub fn class(class_label: impl Into<String>) -> Self {
        Self {
            class_label: Some(class_label.into()),
            ..Self::default()
        }
    }
}

impl RecordFilter<Student> for StudentFilter {
    fn matches(&self, student: &Student) -> bool {
        self.search.matches_any([
            student.name.as_str(),
            student.student_code.as_str(),
            student.email.as_str(),
        ]) && choice_matches(self.grade_level.as_deref(), student.grade_level.as_str())
            && self
                .class_label
                .as_deref()
                .map_or(true, |class| student.class_label().eq_ignore_ascii_case(class.trim()))
    }
}

/// Faculty filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherFilter {
    /// Searches name, teacher code and email.
    pub search: TextQuery,
    pub department: Option<String>,
}

impl RecordFilter<Teacher> for TeacherFilter {
    fn matches(&self, teacher: &Teacher) -> bool {
        self.search.matches_any([
            teacher.name.as_str(),
            teacher.teacher_code.as_str(),
            teacher.email.as_str(),
        ]) && choice_matches(self.department.as_deref(), teacher.department.as_str())
    }
}

/// Gradebook filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeFilter {
    /// Searches student name and subject.
    pub search: TextQuery,
    /// Exact student name; set when the viewer may only see own grades.
    pub student: Option<String>,
    pub category: Option<GradeCategory>,
    pub quarter: Option<u8>,
}

impl GradeFilter {
    /// Default gradebook filter for `user`.
    ///
    /// Students only see their own grades; every other role starts unscoped.
    pub fn for_user(user: &CurrentUser) -> Self {
        match user.role {
            Role::Student => Self {
                student: Some(user.name.clone()),
                ..Self::default()
            },
            Role::Teacher | Role::Parent | Role::Admin => Self::default(),
        }
    }
}

impl RecordFilter<Grade> for GradeFilter {
    fn matches(&self, grade: &Grade) -> bool {
        self.search
            .matches_any([grade.student.as_str(), grade.subject.as_str()])
            && choice_matches(self.student.as_deref(), grade.student.as_str())
            && choice_matches(self.category.as_ref(), &grade.category)
            && choice_matches(self.quarter.as_ref(), &grade.quarter)
    }
}

/// Attendance sheet filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    /// Searches student name.
    pub search: TextQuery,
    pub student_code: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceFilter {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }
}

impl RecordFilter<AttendanceRecord> for AttendanceFilter {
    fn matches(&self, record: &AttendanceRecord) -> bool {
        self.search.matches_any([record.student_name.as_str()])
            && choice_matches(self.student_code.as_deref(), record.student_code.as_str())
            && choice_matches(self.date.as_ref(), &record.date)
            && choice_matches(self.status.as_ref(), &record.status)
    }
}

/// Alert inbox filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFilter {
    /// Searches title, message and student name.
    pub search: TextQuery,
    pub kind: Option<AlertKind>,
    pub severity: Option<Severity>,
    pub resolution: Option<Resolution>,
}

impl RecordFilter<Alert> for AlertFilter {
    fn matches(&self, alert: &Alert) -> bool {
        self.search.matches_any([
            alert.title.as_str(),
            alert.message.as_str(),
            alert.student_name.as_deref().unwrap_or_default(),
        ]) && choice_matches(self.kind.as_ref(), &alert.kind)
            && choice_matches(self.severity.as_ref(), &alert.severity)
            && self
                .resolution
                .map_or(true, |resolution| resolution.matches(alert.resolved))
    }
}
