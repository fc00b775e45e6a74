//! Faculty record.

use crate::model::record::{
    clean_list, merge, require_email, require_id, require_list, require_text, Record, RecordId,
    RecordKind, RecordValidationError,
};
use crate::model::student::MemberStatus;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Departments offered in the faculty screen selector.
pub const DEPARTMENTS: &[&str] = &[
    "Mathematics",
    "Science",
    "English",
    "Filipino",
    "Social Studies",
    "Physical Education",
    "Arts",
];

/// One faculty member.
///
/// # Invariants
/// - `subjects` and `classes` never hold blank entries.
/// - A valid teacher has no `;` inside any `subjects` or `classes` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: RecordId,
    pub teacher_code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub subjects: Vec<String>,
    /// Class labels such as `7A`.
    pub classes: Vec<String>,
    pub hire_date: NaiveDate,
    pub status: MemberStatus,
}

impl Teacher {
    /// Creates an active Mathematics teacher hired today.
    pub fn new(
        teacher_code: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            teacher_code: teacher_code.into(),
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            department: DEPARTMENTS[0].to_string(),
            subjects: Vec::new(),
            classes: Vec::new(),
            hire_date: Local::now().date_naive(),
            status: MemberStatus::Active,
        }
    }

    pub fn in_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets teaching load, dropping blank entries.
    pub fn teaching<S, C>(mut self, subjects: S, classes: C) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        self.subjects = clean_list(subjects);
        self.classes = clean_list(classes);
        self
    }

    /// Returns whether this teacher handles the given class label.
    pub fn teaches_class(&self, class_label: &str) -> bool {
        self.classes
            .iter()
            .any(|class| class.eq_ignore_ascii_case(class_label.trim()))
    }
}

/// Field-wise teacher update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherPatch {
    pub teacher_code: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub classes: Option<Vec<String>>,
    pub hire_date: Option<NaiveDate>,
    pub status: Option<MemberStatus>,
}

impl Record for Teacher {
    type Patch = TeacherPatch;
    const KIND: RecordKind = RecordKind::Teacher;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(self.id)?;
        require_text("teacher_code", &self.teacher_code)?;
        require_text("name", &self.name)?;
        require_email("email", &self.email)?;
        require_list("subjects", &self.subjects)?;
        require_list("classes", &self.classes)
    }

    fn patched(&self, patch: &TeacherPatch) -> Self {
        let mut next = self.clone();
        merge(&mut next.teacher_code, &patch.teacher_code);
        merge(&mut next.name, &patch.name);
        merge(&mut next.email, &patch.email);
        merge(&mut next.phone, &patch.phone);
        merge(&mut next.department, &patch.department);
        merge(&mut next.hire_date, &patch.hire_date);
        merge(&mut next.status, &patch.status);
        if let Some(subjects) = &patch.subjects {
            next.subjects = clean_list(subjects);
        }
        if let Some(classes) = &patch.classes {
            next.classes = clean_list(classes);
        }
        next
    }
}
