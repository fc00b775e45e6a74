//! Early-warning alert record.

use crate::label::labelled_enum;
use crate::model::record::{
    merge, merge_optional_text, non_blank, require_id, require_text, Record, RecordId,
    RecordKind, RecordValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

labelled_enum! {
    /// Alert source area.
    pub enum AlertKind {
        Academic => "academic",
        Attendance => "attendance",
        Behavioral => "behavioral",
        System => "system",
    }
}

labelled_enum! {
    /// Alert urgency, ordered from least to most urgent.
    pub enum Severity {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

/// One alert raised about a student or the system.
///
/// `resolved` is freely settable in both directions; there is no transition
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: RecordId,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub student_code: Option<String>,
    pub student_name: Option<String>,
    pub date: NaiveDate,
    pub resolved: bool,
    pub resolved_by: Option<String>,
    pub resolved_at: Option<NaiveDate>,
}

impl Alert {
    /// Creates an unresolved alert with no student attached.
    pub fn new(
        kind: AlertKind,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            severity,
            title: title.into(),
            message: message.into(),
            student_code: None,
            student_name: None,
            date,
            resolved: false,
            resolved_by: None,
            resolved_at: None,
        }
    }

    pub fn about(mut self, student_code: impl Into<String>, student_name: impl Into<String>) -> Self {
        self.student_code = non_blank(student_code);
        self.student_name = non_blank(student_name);
        self
    }

    pub fn mark_resolved(mut self, by: impl Into<String>, on: NaiveDate) -> Self {
        self.resolved = true;
        self.resolved_by = non_blank(by);
        self.resolved_at = Some(on);
        self
    }

    /// Unresolved critical alerts are the ones surfaced on summary cards.
    pub fn is_critical_open(&self) -> bool {
        !self.resolved && self.severity == Severity::Critical
    }
}

/// Field-wise alert update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertPatch {
    pub kind: Option<AlertKind>,
    pub severity: Option<Severity>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub resolved: Option<bool>,
    pub resolved_by: Option<Option<String>>,
    pub resolved_at: Option<Option<NaiveDate>>,
}

impl AlertPatch {
    /// Patch marking an alert resolved by `by` on `on`.
    pub fn resolve(by: impl Into<String>, on: NaiveDate) -> Self {
        Self {
            resolved: Some(true),
            resolved_by: Some(Some(by.into())),
            resolved_at: Some(Some(on)),
            ..Self::default()
        }
    }

    /// Patch reopening an alert and clearing resolution metadata.
    pub fn reopen() -> Self {
        Self {
            resolved: Some(false),
            resolved_by: Some(None),
            resolved_at: Some(None),
            ..Self::default()
        }
    }
}

impl Record for Alert {
    type Patch = AlertPatch;
    const KIND: RecordKind = RecordKind::Alert;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(self.id)?;
        require_text("title", &self.title)?;
        require_text("message", &self.message)
    }

    fn patched(&self, patch: &AlertPatch) -> Self {
        let mut next = self.clone();
        merge(&mut next.kind, &patch.kind);
        merge(&mut next.severity, &patch.severity);
        merge(&mut next.title, &patch.title);
        merge(&mut next.message, &patch.message);
        merge(&mut next.resolved, &patch.resolved);
        merge_optional_text(&mut next.resolved_by, &patch.resolved_by);
        merge(&mut next.resolved_at, &patch.resolved_at);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::{Alert, AlertKind, AlertPatch, Severity};
    use crate::model::record::Record;
    use chrono::NaiveDate;

    #[test]
    fn resolve_then_reopen_clears_metadata() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        let alert = Alert::new(
            AlertKind::System,
            Severity::Critical,
            "Grade Calculation Error",
            "Error in calculating final grades for Grade 8A",
            day,
        );
        assert!(alert.is_critical_open());

        let resolved = alert.patched(&AlertPatch::resolve("Mary Smith", day));
        assert!(resolved.resolved);
        assert_eq!(resolved.resolved_by.as_deref(), Some("Mary Smith"));
        assert!(!resolved.is_critical_open());

        let reopened = resolved.patched(&AlertPatch::reopen());
        assert!(!reopened.resolved);
        assert_eq!(reopened.resolved_by, None);
        assert_eq!(reopened.resolved_at, None);
    }

    #[test]
    fn severity_orders_by_urgency() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
    }
}
