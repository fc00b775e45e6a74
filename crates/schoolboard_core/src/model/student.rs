//! Student roster record.

use crate::label::labelled_enum;
use crate::model::record::{
    merge, require_email, require_id, require_text, Record, RecordId, RecordKind,
    RecordValidationError,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

labelled_enum! {
    /// Enrollment or employment state shared by students and teachers.
    #[derive(Default)]
    pub enum MemberStatus {
        #[default]
        Active => "active",
        Inactive => "inactive",
    }
}

impl MemberStatus {
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// One enrolled student.
///
/// `student_code` is the school-assigned number (`STU001`) other records use
/// as a lookup key. It is not an ownership edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub student_code: String,
    pub name: String,
    pub email: String,
    /// Year level as entered, e.g. `7`.
    pub grade_level: String,
    /// Section letter, e.g. `A`.
    pub section: String,
    pub parent_name: String,
    pub parent_contact: String,
    pub address: String,
    pub enrollment_date: NaiveDate,
    pub status: MemberStatus,
}

impl Student {
    /// Creates an active grade 7, section A student enrolled today.
    pub fn new(
        student_code: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), student_code, name, email)
    }

    /// Creates a student with a caller-provided id (import paths).
    pub fn with_id(
        id: RecordId,
        student_code: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            student_code: student_code.into(),
            name: name.into(),
            email: email.into(),
            grade_level: "7".to_string(),
            section: "A".to_string(),
            parent_name: String::new(),
            parent_contact: String::new(),
            address: String::new(),
            enrollment_date: Local::now().date_naive(),
            status: MemberStatus::Active,
        }
    }

    /// Sets year level and section.
    pub fn in_class(mut self, grade_level: impl Into<String>, section: impl Into<String>) -> Self {
        self.grade_level = grade_level.into();
        self.section = section.into();
        self
    }

    /// Sets parent name and contact.
    pub fn with_parent(mut self, name: impl Into<String>, contact: impl Into<String>) -> Self {
        self.parent_name = name.into();
        self.parent_contact = contact.into();
        self
    }

    /// Class label such as `7A`.
    pub fn class_label(&self) -> String {
        format!("{}{}", self.grade_level.trim(), self.section.trim())
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Field-wise student update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub student_code: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub grade_level: Option<String>,
    pub section: Option<String>,
    pub parent_name: Option<String>,
    pub parent_contact: Option<String>,
    pub address: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<MemberStatus>,
}

impl Record for Student {
    type Patch = StudentPatch;
    const KIND: RecordKind = RecordKind::Student;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(self.id)?;
        require_text("student_code", &self.student_code)?;
        require_text("name", &self.name)?;
        require_email("email", &self.email)
    }

    fn patched(&self, patch: &StudentPatch) -> Self {
        let mut next = self.clone();
        merge(&mut next.student_code, &patch.student_code);
        merge(&mut next.name, &patch.name);
        merge(&mut next.email, &patch.email);
        merge(&mut next.grade_level, &patch.grade_level);
        merge(&mut next.section, &patch.section);
        merge(&mut next.parent_name, &patch.parent_name);
        merge(&mut next.parent_contact, &patch.parent_contact);
        merge(&mut next.address, &patch.address);
        merge(&mut next.enrollment_date, &patch.enrollment_date);
        merge(&mut next.status, &patch.status);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberStatus, Student, StudentPatch};
    use crate::model::record::{Record, RecordValidationError};

    #[test]
    fn new_student_defaults_to_active_seven_a() {
        let student = Student::new("STU009", "Lia Cruz", "lia.cruz@sjcsi.edu");
        assert!(!student.id.is_nil());
        assert_eq!(student.class_label(), "7A");
        assert!(student.is_active());
        assert!(student.validate().is_ok());
    }

    #[test]
    fn validate_requires_code_name_and_email() {
        let student = Student::new(" ", "Lia Cruz", "lia.cruz@sjcsi.edu");
        assert_eq!(
            student.validate().unwrap_err(),
            RecordValidationError::MissingField("student_code")
        );

        let student = Student::new("STU009", "Lia Cruz", "not-an-email");
        assert_eq!(
            student.validate().unwrap_err(),
            RecordValidationError::InvalidEmail("email")
        );
    }

    #[test]
    fn patched_merges_only_set_fields() {
        let student = Student::new("STU009", "Lia Cruz", "lia.cruz@sjcsi.edu").in_class("8", "B");
        let next = student.patched(&StudentPatch {
            section: Some("C".to_string()),
            status: Some(MemberStatus::Inactive),
            ..StudentPatch::default()
        });

        assert_eq!(next.id, student.id);
        assert_eq!(next.name, "Lia Cruz");
        assert_eq!(next.class_label(), "8C");
        assert!(!next.is_active());
    }
}
