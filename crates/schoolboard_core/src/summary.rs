//! Summary aggregates shown on cards and headers.
//!
//! # Responsibility
//! - Reduce record lists to counts, rates and bands.
//!
//! # Invariants
//! - Every function is pure and single-pass over its input.
//! - A zero denominator yields 0, never NaN or a panic.

use crate::config::GradingSettings;
use crate::filter::{RecordFilter, StudentFilter};
use crate::label::labelled_enum;
use crate::model::alert::{Alert, AlertKind, Severity};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::grade::Grade;
use crate::model::student::Student;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

labelled_enum! {
    /// Colour band for a percentage score.
    pub enum PerformanceBand {
        Excellent => "excellent",
        Good => "good",
        NeedsAttention => "needs_attention",
    }
}

impl PerformanceBand {
    /// `>= 90` excellent, `>= 80` good, anything lower needs attention.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::Excellent
        } else if percent >= 80.0 {
            Self::Good
        } else {
            Self::NeedsAttention
        }
    }
}

labelled_enum! {
    /// Letter bucket used by the grade distribution report.
    pub enum LetterGrade {
        A => "a",
        B => "b",
        C => "c",
        D => "d",
        F => "f",
    }
}

impl LetterGrade {
    /// A 90-100, B 80-89, C 70-79, D 60-69, F below 60.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::A
        } else if percent >= 80.0 {
            Self::B
        } else if percent >= 70.0 {
            Self::C
        } else if percent >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

/// Number of records satisfying `filter`.
pub fn count_matching<R, F>(records: &[R], filter: &F) -> usize
where
    F: RecordFilter<R> + ?Sized,
{
    records.iter().filter(|record| filter.matches(record)).count()
}

/// `count / denominator` as a whole percent, rounded half up; 0 when the
/// denominator is 0.
pub fn rate_percent(count: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    ((count as f64 / denominator as f64) * 100.0).round() as u32
}

/// `score / max_score * 100`; 0.0 when `max_score` is 0.
pub fn score_percent(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(max_score) * 100.0
}

/// One-decimal percent label, e.g. `85.0%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Alert inbox header counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertSummary {
    pub total: usize,
    pub unresolved: usize,
    pub critical_unresolved: usize,
    /// Unresolved count per kind; every kind is present, possibly 0.
    pub unresolved_by_kind: BTreeMap<AlertKind, usize>,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let mut summary = Self {
            total: alerts.len(),
            unresolved_by_kind: AlertKind::ALL.iter().map(|kind| (*kind, 0)).collect(),
            ..Self::default()
        };
        for alert in alerts.iter().filter(|alert| !alert.resolved) {
            summary.unresolved += 1;
            if alert.severity == Severity::Critical {
                summary.critical_unresolved += 1;
            }
            *summary.unresolved_by_kind.entry(alert.kind).or_insert(0) += 1;
        }
        summary
    }
}

/// Per-status attendance counts for one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceTally {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub excused: usize,
}

impl AttendanceTally {
    pub fn for_date(records: &[AttendanceRecord], date: NaiveDate) -> Self {
        let mut tally = Self::default();
        for record in records.iter().filter(|record| record.date == date) {
            match record.status {
                AttendanceStatus::Present => tally.present += 1,
                AttendanceStatus::Absent => tally.absent += 1,
                AttendanceStatus::Late => tally.late += 1,
                AttendanceStatus::Excused => tally.excused += 1,
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.present + self.absent + self.late + self.excused
    }
}

/// Present rate for one class on one date, as a whole percent.
///
/// The numerator counts `present` records on `date` whose student is in
/// `class_label`; the denominator is the number of roster students in that
/// class, counting every roster entry even when two share a code. Late,
/// absent and excused marks do not count as present. An empty class
/// yields 0.
pub fn attendance_rate(
    records: &[AttendanceRecord],
    roster: &[Student],
    class_label: &str,
    date: NaiveDate,
) -> u32 {
    let class_filter = StudentFilter::class(class_label);
    let members: Vec<&Student> = roster
        .iter()
        .filter(|student| class_filter.matches(student))
        .collect();
    let codes: HashSet<&str> = members
        .iter()
        .map(|student| student.student_code.as_str())
        .collect();
    let present = records
        .iter()
        .filter(|record| {
            record.date == date
                && record.status == AttendanceStatus::Present
                && codes.contains(record.student_code.as_str())
        })
        .count();
    rate_percent(present, members.len())
}

/// Present rate across every record of one student; 0 with no records.
pub fn student_attendance_rate(records: &[AttendanceRecord], student_code: &str) -> u32 {
    let mut total = 0;
    let mut present = 0;
    for record in records.iter().filter(|record| record.student_code == student_code) {
        total += 1;
        if record.status == AttendanceStatus::Present {
            present += 1;
        }
    }
    rate_percent(present, total)
}

/// Gradebook summary against the configured grading policy.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSummary {
    pub count: usize,
    /// Mean of per-grade percentages; 0.0 for an empty list.
    pub average_percent: f64,
    pub passing: usize,
    pub honor_roll: usize,
    /// Count per letter bucket; every bucket is present, possibly 0.
    pub distribution: BTreeMap<LetterGrade, usize>,
}

impl GradeSummary {
    pub fn from_grades(grades: &[Grade], policy: &GradingSettings) -> Self {
        let mut distribution: BTreeMap<LetterGrade, usize> =
            LetterGrade::ALL.iter().map(|letter| (*letter, 0)).collect();
        let mut total_percent = 0.0;
        let mut passing = 0;
        let mut honor_roll = 0;

        for grade in grades {
            let percent = grade.percentage();
            total_percent += percent;
            if policy.is_passing(percent) {
                passing += 1;
            }
            if policy.is_honor_roll(percent) {
                honor_roll += 1;
            }
            *distribution
                .entry(LetterGrade::from_percent(percent))
                .or_insert(0) += 1;
        }

        let average_percent = if grades.is_empty() {
            0.0
        } else {
            total_percent / grades.len() as f64
        };

        Self {
            count: grades.len(),
            average_percent,
            passing,
            honor_roll,
            distribution,
        }
    }

    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_percent(self.average_percent)
    }
}
