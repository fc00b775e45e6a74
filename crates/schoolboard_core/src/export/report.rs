//! Report request documents.

use crate::export::{ExportFormat, ExportResult};
use crate::label::labelled_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Report selectable on the reports screen.
    #[derive(Default)]
    pub enum ReportKind {
        #[default]
        Academic => "academic",
        Attendance => "attendance",
        Student => "student",
        Grade => "grade",
    }
}

impl ReportKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Academic => "Academic Performance",
            Self::Attendance => "Attendance Report",
            Self::Student => "Student Progress",
            Self::Grade => "Grade Distribution",
        }
    }
}

labelled_enum! {
    /// Period a report covers.
    #[derive(Default)]
    pub enum DateRange {
        #[default]
        Quarter => "quarter",
        Semester => "semester",
        Year => "year",
        Custom => "custom",
    }
}

/// Parameters of one generated report.
///
/// Serialized with the camelCase keys downstream tools already read:
/// `type`, `dateRange`, `grade`, `subject`, `generatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub date_range: DateRange,
    /// Grade level; empty selects every grade.
    pub grade: String,
    /// Subject name; empty selects every subject.
    pub subject: String,
    pub generated_at: DateTime<Utc>,
}

impl ReportConfig {
    /// Current-quarter report over every grade and subject, stamped now.
    pub fn new(kind: ReportKind) -> Self {
        Self::stamped(kind, Utc::now())
    }

    pub fn stamped(kind: ReportKind, at: DateTime<Utc>) -> Self {
        Self {
            kind,
            date_range: DateRange::default(),
            grade: String::new(),
            subject: String::new(),
            generated_at: at,
        }
    }

    pub fn covering(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn for_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into().trim().to_string();
        self
    }

    pub fn for_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into().trim().to_string();
        self
    }

    pub fn to_json_pretty(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `<kind>-report-<YYYY-MM-DD>.json`, dated by `generated_at`.
    pub fn file_name(&self) -> String {
        format!(
            "{}-report-{}.{}",
            self.kind,
            self.generated_at.format("%Y-%m-%d"),
            ExportFormat::Json.extension()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DateRange, ReportConfig, ReportKind};
    use chrono::{TimeZone, Utc};

    #[test]
    fn json_uses_camel_case_keys() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let config = ReportConfig::stamped(ReportKind::Grade, at)
            .covering(DateRange::Year)
            .for_grade(" 8 ");
        let value: serde_json::Value =
            serde_json::from_str(&config.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["type"], "grade");
        assert_eq!(value["dateRange"], "year");
        assert_eq!(value["grade"], "8");
        assert_eq!(value["subject"], "");
        assert_eq!(value["generatedAt"], "2024-03-01T08:30:00Z");
        assert_eq!(config.file_name(), "grade-report-2024-03-01.json");
    }

    #[test]
    fn defaults_to_current_quarter() {
        let config = ReportConfig::new(ReportKind::default());
        assert_eq!(config.kind, ReportKind::Academic);
        assert_eq!(config.date_range, DateRange::Quarter);
        assert_eq!(ReportKind::Attendance.title(), "Attendance Report");
    }
}
