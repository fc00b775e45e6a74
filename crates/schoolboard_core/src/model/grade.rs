//! Graded assessment record.

use crate::label::labelled_enum;
use crate::model::record::{
    merge, merge_optional_text, non_blank, require_id, require_range, require_text, Record,
    RecordId, RecordKind, RecordValidationError,
};
use crate::summary::{score_percent, PerformanceBand};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quarter assigned to new grades unless set explicitly.
pub const DEFAULT_QUARTER: u8 = 3;

labelled_enum! {
    /// Assessment category.
    pub enum GradeCategory {
        Quiz => "quiz",
        Exam => "exam",
        Activity => "activity",
        Project => "project",
    }
}

/// One scored assessment for one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub id: RecordId,
    /// Student display name as entered by the teacher.
    pub student: String,
    /// Optional lookup key into the student roster.
    pub student_code: Option<String>,
    pub subject: String,
    pub category: GradeCategory,
    pub score: u32,
    pub max_score: u32,
    pub date: NaiveDate,
    /// School quarter, `1..=4`.
    pub quarter: u8,
}

impl Grade {
    pub fn new(
        student: impl Into<String>,
        subject: impl Into<String>,
        category: GradeCategory,
        score: u32,
        max_score: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student: student.into(),
            student_code: None,
            subject: subject.into(),
            category,
            score,
            max_score,
            date,
            quarter: DEFAULT_QUARTER,
        }
    }

    pub fn in_quarter(mut self, quarter: u8) -> Self {
        self.quarter = quarter;
        self
    }

    pub fn for_student_code(mut self, student_code: impl Into<String>) -> Self {
        self.student_code = non_blank(student_code);
        self
    }

    /// Score as a percentage of `max_score`; `0.0` when `max_score` is zero.
    pub fn percentage(&self) -> f64 {
        score_percent(self.score, self.max_score)
    }

    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_percent(self.percentage())
    }
}

/// Field-wise grade update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradePatch {
    pub student: Option<String>,
    pub student_code: Option<Option<String>>,
    pub subject: Option<String>,
    pub category: Option<GradeCategory>,
    pub score: Option<u32>,
    pub max_score: Option<u32>,
    pub date: Option<NaiveDate>,
    pub quarter: Option<u8>,
}

impl Record for Grade {
    type Patch = GradePatch;
    const KIND: RecordKind = RecordKind::Grade;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(self.id)?;
        require_text("student", &self.student)?;
        require_text("subject", &self.subject)?;
        require_range("quarter", i64::from(self.quarter), 1, 4)
    }

    fn patched(&self, patch: &GradePatch) -> Self {
        let mut next = self.clone();
        merge(&mut next.student, &patch.student);
        merge_optional_text(&mut next.student_code, &patch.student_code);
        merge(&mut next.subject, &patch.subject);
        merge(&mut next.category, &patch.category);
        merge(&mut next.score, &patch.score);
        merge(&mut next.max_score, &patch.max_score);
        merge(&mut next.date, &patch.date);
        merge(&mut next.quarter, &patch.quarter);
        next
    }
}
