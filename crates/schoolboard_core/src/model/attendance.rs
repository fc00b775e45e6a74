//! Daily attendance mark.

use crate::label::labelled_enum;
use crate::model::record::{
    merge, merge_optional_text, non_blank, require_id, require_text, Record, RecordId,
    RecordKind, RecordValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

labelled_enum! {
    /// Attendance outcome for one student on one day.
    #[derive(Default)]
    pub enum AttendanceStatus {
        #[default]
        Present => "present",
        Absent => "absent",
        Late => "late",
        Excused => "excused",
    }
}

/// Attendance for one student on one date.
///
/// At most one record per `(student_code, date)` is kept by the attendance
/// screen; the store itself does not enforce that pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub student_code: String,
    pub student_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub subject: Option<String>,
    pub notes: Option<String>,
}

impl AttendanceRecord {
    pub fn new(
        student_code: impl Into<String>,
        student_name: impl Into<String>,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_code: student_code.into(),
            student_name: student_name.into(),
            date,
            status,
            subject: None,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = non_blank(notes);
        self
    }
}

/// Field-wise attendance update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendancePatch {
    pub student_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
    pub subject: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl AttendancePatch {
    pub fn status(status: AttendanceStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Record for AttendanceRecord {
    type Patch = AttendancePatch;
    const KIND: RecordKind = RecordKind::Attendance;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(self.id)?;
        require_text("student_code", &self.student_code)
    }

    fn patched(&self, patch: &AttendancePatch) -> Self {
        let mut next = self.clone();
        merge(&mut next.student_name, &patch.student_name);
        merge(&mut next.date, &patch.date);
        merge(&mut next.status, &patch.status);
        merge_optional_text(&mut next.subject, &patch.subject);
        merge_optional_text(&mut next.notes, &patch.notes);
        next
    }
}
