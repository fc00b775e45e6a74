//! Column layouts for each record kind.

use crate::export::delimited::{format_date, CsvRecord, RowCells};
use crate::export::ExportResult;
use crate::model::alert::Alert;
use crate::model::attendance::AttendanceRecord;
use crate::model::grade::Grade;
use crate::model::record::{clean_list, LIST_SEPARATOR};
use crate::model::student::Student;
use crate::model::teacher::Teacher;

const LIST_JOINER: &str = "; ";

fn join_list(items: &[String]) -> String {
    items.join(LIST_JOINER)
}

fn split_list(value: &str) -> Vec<String> {
    clean_list(value.split(LIST_SEPARATOR))
}

fn optional_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl CsvRecord for Student {
    const HEADERS: &'static [&'static str] = &[
        "Student ID",
        "Name",
        "Email",
        "Grade",
        "Section",
        "Parent Name",
        "Parent Contact",
        "Address",
        "Enrollment Date",
        "Status",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.student_code.clone(),
            self.name.clone(),
            self.email.clone(),
            self.grade_level.clone(),
            self.section.clone(),
            self.parent_name.clone(),
            self.parent_contact.clone(),
            self.address.clone(),
            format_date(self.enrollment_date),
            self.status.to_string(),
        ]
    }

    fn from_row(row: &RowCells<'_>) -> ExportResult<Self> {
        let mut student = Student::new(row.text("Student ID")?, row.text("Name")?, row.text("Email")?)
            .in_class(row.text("Grade")?, row.text("Section")?)
            .with_parent(row.text("Parent Name")?, row.text("Parent Contact")?);
        student.address = row.text("Address")?;
        student.enrollment_date = row.date("Enrollment Date")?;
        student.status = row.parse("Status")?;
        Ok(student)
    }
}

impl CsvRecord for Teacher {
    const HEADERS: &'static [&'static str] = &[
        "Teacher ID",
        "Name",
        "Email",
        "Phone",
        "Department",
        "Subjects",
        "Classes",
        "Hire Date",
        "Status",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.teacher_code.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.department.clone(),
            join_list(&self.subjects),
            join_list(&self.classes),
            format_date(self.hire_date),
            self.status.to_string(),
        ]
    }

    fn from_row(row: &RowCells<'_>) -> ExportResult<Self> {
        let mut teacher = Teacher::new(row.text("Teacher ID")?, row.text("Name")?, row.text("Email")?)
            .in_department(row.text("Department")?)
            .teaching(
                split_list(&row.text("Subjects")?),
                split_list(&row.text("Classes")?),
            );
        teacher.phone = row.text("Phone")?;
        teacher.hire_date = row.date("Hire Date")?;
        teacher.status = row.parse("Status")?;
        Ok(teacher)
    }
}

impl CsvRecord for Grade {
    const HEADERS: &'static [&'static str] = &[
        "Student",
        "Student ID",
        "Subject",
        "Category",
        "Score",
        "Max Score",
        "Date",
        "Quarter",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.student.clone(),
            optional_cell(&self.student_code),
            self.subject.clone(),
            self.category.to_string(),
            self.score.to_string(),
            self.max_score.to_string(),
            format_date(self.date),
            self.quarter.to_string(),
        ]
    }

    fn from_row(row: &RowCells<'_>) -> ExportResult<Self> {
        let mut grade = Grade::new(
            row.text("Student")?,
            row.text("Subject")?,
            row.parse("Category")?,
            row.parse("Score")?,
            row.parse("Max Score")?,
            row.date("Date")?,
        )
        .in_quarter(row.parse("Quarter")?);
        grade.student_code = row.optional("Student ID")?;
        Ok(grade)
    }
}

impl CsvRecord for AttendanceRecord {
    const HEADERS: &'static [&'static str] = &[
        "Student ID",
        "Student Name",
        "Date",
        "Status",
        "Subject",
        "Notes",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.student_code.clone(),
            self.student_name.clone(),
            format_date(self.date),
            self.status.to_string(),
            optional_cell(&self.subject),
            optional_cell(&self.notes),
        ]
    }

    fn from_row(row: &RowCells<'_>) -> ExportResult<Self> {
        let mut record = AttendanceRecord::new(
            row.text("Student ID")?,
            row.text("Student Name")?,
            row.date("Date")?,
            row.parse("Status")?,
        );
        record.subject = row.optional("Subject")?;
        record.notes = row.optional("Notes")?;
        Ok(record)
    }
}

impl CsvRecord for Alert {
    const HEADERS: &'static [&'static str] = &[
        "Type",
        "Severity",
        "Title",
        "Message",
        "Student ID",
        "Student Name",
        "Date",
        "Resolved",
        "Resolved By",
        "Resolved At",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.severity.to_string(),
            self.title.clone(),
            self.message.clone(),
            optional_cell(&self.student_code),
            optional_cell(&self.student_name),
            format_date(self.date),
            self.resolved.to_string(),
            optional_cell(&self.resolved_by),
            self.resolved_at.map(format_date).unwrap_or_default(),
        ]
    }

    fn from_row(row: &RowCells<'_>) -> ExportResult<Self> {
        let mut alert = Alert::new(
            row.parse("Type")?,
            row.parse("Severity")?,
            row.text("Title")?,
            row.text("Message")?,
            row.date("Date")?,
        );
        alert.student_code = row.optional("Student ID")?;
        alert.student_name = row.optional("Student Name")?;
        alert.resolved = row.parse("Resolved")?;
        alert.resolved_by = row.optional("Resolved By")?;
        alert.resolved_at = row.optional_date("Resolved At")?;
        Ok(alert)
    }
}
