//! Downloadable exports.
//!
//! # Responsibility
//! - Serialize record snapshots as delimited text and re-import them.
//! - Dump report configuration documents as JSON.
//! - Name export files `<kind>-<YYYY-MM-DD>.<ext>`.
//!
//! # Invariants
//! - Delimited output quotes any field holding the delimiter, a quote or a
//!   line break, so `parse_csv(to_csv(records))` reproduces every field of a
//!   stored record.
//! - Optional text is written as an empty cell when unset and read back as
//!   `None` when blank. Record builders and patches never store blank
//!   optional text, so `Some("")` only arises from direct field writes and
//!   re-imports as `None`.
//! - List fields share one cell joined by `; `. Record validation rejects
//!   `;` inside an entry, so stored lists split back unchanged.
//! - Import never reuses exported ids; each row becomes a fresh record.

mod delimited;
mod report;
mod rows;

pub use delimited::{parse_csv, to_csv, CsvRecord, RowCells};
pub use report::{DateRange, ReportConfig, ReportKind};

use crate::label::labelled_enum;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ExportResult<T> = Result<T, ExportError>;

labelled_enum! {
    /// Export file format.
    pub enum ExportFormat {
        Csv => "csv",
        Json => "json",
    }
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        self.as_str()
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }
}

/// Export or import failure.
#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
    /// Output bytes were not UTF-8.
    Encoding(std::string::FromUtf8Error),
    /// Imported header row differs from the expected columns.
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// One imported cell could not be converted.
    InvalidField {
        line: u64,
        column: &'static str,
        message: String,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Encoding(err) => write!(f, "export is not valid utf-8: {err}"),
            Self::HeaderMismatch { expected, found } => write!(
                f,
                "unexpected header row: expected [{}], found [{}]",
                expected.join(", "),
                found.join(", ")
            ),
            Self::InvalidField {
                line,
                column,
                message,
            } => write!(f, "line {line}, column `{column}`: {message}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Encoding(err) => Some(err),
            Self::HeaderMismatch { .. } | Self::InvalidField { .. } => None,
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<std::string::FromUtf8Error> for ExportError {
    fn from(value: std::string::FromUtf8Error) -> Self {
        Self::Encoding(value)
    }
}

/// Download name `<kind>-<YYYY-MM-DD>.<ext>`.
pub fn export_file_name(kind: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}-{}.{}",
        kind.trim(),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::{export_file_name, ExportFormat};
    use chrono::NaiveDate;

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(
            export_file_name("attendance", date, ExportFormat::Csv),
            "attendance-2024-01-05.csv"
        );
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }
}
