//! Comma-separated export and re-import.

use crate::export::{ExportError, ExportResult};
use crate::model::record::non_blank;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Record kind with a fixed column layout.
pub trait CsvRecord: Sized {
    /// Header row, in column order.
    const HEADERS: &'static [&'static str];

    /// Cells in `HEADERS` order.
    fn to_row(&self) -> Vec<String>;

    /// Builds a fresh record from one data row.
    fn from_row(row: &RowCells<'_>) -> ExportResult<Self>;
}

/// Writes a header row plus one row per record.
pub fn to_csv<R: CsvRecord>(records: &[R]) -> ExportResult<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(R::HEADERS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Parses text produced by [`to_csv`] back into records.
///
/// # Errors
/// - `HeaderMismatch` when the header row is not `R::HEADERS`.
/// - `InvalidField` when a cell cannot be converted.
pub fn parse_csv<R: CsvRecord>(text: &str) -> ExportResult<Vec<R>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().ne(R::HEADERS.iter().copied()) {
        return Err(ExportError::HeaderMismatch {
            expected: R::HEADERS.iter().map(|h| (*h).to_string()).collect(),
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cells = RowCells {
            row: &row,
            headers: R::HEADERS,
        };
        records.push(R::from_row(&cells)?);
    }
    Ok(records)
}

/// Named access to one data row.
pub struct RowCells<'a> {
    row: &'a StringRecord,
    headers: &'static [&'static str],
}

impl RowCells<'_> {
    fn line(&self) -> u64 {
        self.row.position().map_or(0, |position| position.line())
    }

    fn invalid(&self, column: &'static str, message: impl Into<String>) -> ExportError {
        ExportError::InvalidField {
            line: self.line(),
            column,
            message: message.into(),
        }
    }

    /// Raw cell text; a missing trailing cell reads as empty.
    pub fn text(&self, column: &'static str) -> ExportResult<String> {
        let index = self
            .headers
            .iter()
            .position(|header| *header == column)
            .ok_or_else(|| self.invalid(column, "unknown column"))?;
        Ok(self.row.get(index).unwrap_or_default().to_string())
    }

    /// Trimmed cell text; `None` for a blank cell.
    pub fn optional(&self, column: &'static str) -> ExportResult<Option<String>> {
        Ok(non_blank(self.text(column)?))
    }

    pub fn parse<T>(&self, column: &'static str) -> ExportResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.text(column)?;
        value
            .trim()
            .parse()
            .map_err(|err: T::Err| self.invalid(column, err.to_string()))
    }

    pub fn date(&self, column: &'static str) -> ExportResult<NaiveDate> {
        let value = self.text(column)?;
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map_err(|err| self.invalid(column, err.to_string()))
    }

    pub fn optional_date(&self, column: &'static str) -> ExportResult<Option<NaiveDate>> {
        if self.text(column)?.trim().is_empty() {
            return Ok(None);
        }
        self.date(column).map(Some)
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
