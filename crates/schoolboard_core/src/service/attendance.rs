//! Attendance sheet screen model.
//!
//! # Responsibility
//! - Own the attendance log and the class roster it is taken against.
//! - Record one mark per student per date.
//!
//! # Invariants
//! - `mark` never creates a second record for the same student and date.
//! - A student with no record on a date reads as present.

use crate::export::ExportResult;
use crate::filter::{AttendanceFilter, RecordFilter, StudentFilter};
use crate::model::attendance::{AttendancePatch, AttendanceRecord, AttendanceStatus};
use crate::model::record::RecordId;
use crate::model::student::Student;
use crate::service::list_view::ListView;
use crate::store::record_store::StoreResult;
use crate::summary::{attendance_rate, student_attendance_rate, AttendanceTally};
use chrono::{Datelike, Days, NaiveDate};
use log::info;

/// One line of the daily attendance sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub student_code: String,
    pub student_name: String,
    pub status: AttendanceStatus,
}

/// Attendance screen: log records, filter and class roster.
#[derive(Debug, Clone, Default)]
pub struct AttendanceService {
    view: ListView<AttendanceRecord, AttendanceFilter>,
    roster: Vec<Student>,
}

impl AttendanceService {
    /// Empty log over `roster`.
    pub fn new(roster: Vec<Student>) -> Self {
        Self {
            view: ListView::new(),
            roster,
        }
    }

    /// Log seeded from `records` through the store.
    pub fn with_records<I>(roster: Vec<Student>, records: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = AttendanceRecord>,
    {
        Ok(Self {
            view: ListView::from_records(records)?,
            roster,
        })
    }

    pub fn view(&self) -> &ListView<AttendanceRecord, AttendanceFilter> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ListView<AttendanceRecord, AttendanceFilter> {
        &mut self.view
    }

    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    pub fn set_roster(&mut self, roster: Vec<Student>) {
        self.roster = roster;
    }

    /// Record for `student_code` on `date`, if one was marked.
    pub fn record_for(&self, student_code: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.view
            .store()
            .find(|record| record.student_code == student_code && record.date == date)
    }

    /// Marked status, or present when nothing was recorded.
    pub fn status_for(&self, student_code: &str, date: NaiveDate) -> AttendanceStatus {
        self.record_for(student_code, date)
            .map(|record| record.status)
            .unwrap_or_default()
    }

    /// Sets the status of `student_code` on `date`.
    ///
    /// Updates the existing record for that student and date, or appends a
    /// new one named from the roster (blank name when off-roster).
    pub fn mark(
        &mut self,
        student_code: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> StoreResult<RecordId> {
        if let Some(id) = self.record_for(student_code, date).map(|record| record.id) {
            self.view.update(id, &AttendancePatch::status(status))?;
            info!("event=attendance_mark module=service status=ok mode=update id={id}");
            return Ok(id);
        }

        let student_name = self
            .roster
            .iter()
            .find(|student| student.student_code == student_code)
            .map(|student| student.name.clone())
            .unwrap_or_default();
        let id = self.view.add(AttendanceRecord::new(
            student_code,
            student_name,
            date,
            status,
        ))?;
        info!("event=attendance_mark module=service status=ok mode=insert id={id}");
        Ok(id)
    }

    /// Daily sheet for one class, narrowed by the view's name search.
    pub fn sheet(&self, class_label: &str, date: NaiveDate) -> Vec<SheetRow> {
        let class_filter = StudentFilter::class(class_label);
        let search = &self.view.filter().search;
        self.roster
            .iter()
            .filter(|student| class_filter.matches(student))
            .filter(|student| search.matches_any([student.name.as_str()]))
            .map(|student| SheetRow {
                student_code: student.student_code.clone(),
                student_name: student.name.clone(),
                status: self.status_for(&student.student_code, date),
            })
            .collect()
    }

    pub fn tally(&self, date: NaiveDate) -> AttendanceTally {
        AttendanceTally::for_date(self.view.store().as_slice(), date)
    }

    /// Present rate of `class_label` on `date`, as a whole percent.
    pub fn class_rate(&self, class_label: &str, date: NaiveDate) -> u32 {
        attendance_rate(self.view.store().as_slice(), &self.roster, class_label, date)
    }

    /// Present rate over every record of one student.
    pub fn student_rate(&self, student_code: &str) -> u32 {
        student_attendance_rate(self.view.store().as_slice(), student_code)
    }

    pub fn export_csv(&self) -> ExportResult<String> {
        self.view.export_csv()
    }
}

/// Seven days starting on the Sunday on or before `date`.
pub fn week_of(date: NaiveDate) -> Vec<NaiveDate> {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    start.iter_days().take(7).collect()
}

#[cfg(test)]
mod tests {
    use super::{week_of, AttendanceService};
    use crate::model::attendance::AttendanceStatus;
    use crate::model::student::Student;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn service() -> AttendanceService {
        AttendanceService::new(vec![
            Student::new("STU001", "John Doe", "john.doe@sjcsi.edu"),
            Student::new("STU002", "Jane Smith", "jane.smith@sjcsi.edu"),
        ])
    }

    #[test]
    fn mark_upserts_per_student_and_date() {
        let mut service = service();
        let first = service.mark("STU001", day(15), AttendanceStatus::Late).unwrap();
        let again = service.mark("STU001", day(15), AttendanceStatus::Absent).unwrap();
        assert_eq!(first, again);
        assert_eq!(service.view().total_count(), 1);
        assert_eq!(service.status_for("STU001", day(15)), AttendanceStatus::Absent);
        assert_eq!(service.view().all()[0].student_name, "John Doe");

        service.mark("STU001", day(16), AttendanceStatus::Present).unwrap();
        assert_eq!(service.view().total_count(), 2);
    }

    #[test]
    fn unmarked_students_read_as_present() {
        let mut service = service();
        service.mark("STU002", day(15), AttendanceStatus::Absent).unwrap();
        let sheet = service.sheet("7A", day(15));
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet[0].status, AttendanceStatus::Present);
        assert_eq!(sheet[1].status, AttendanceStatus::Absent);
        assert_eq!(service.class_rate("7A", day(15)), 0);
    }

    #[test]
    fn week_starts_on_sunday() {
        let week = week_of(day(17));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], day(14));
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert_eq!(week[6], day(20));
        assert_eq!(week_of(day(14))[0], day(14));
    }
}
