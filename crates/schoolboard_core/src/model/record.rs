//! Shared record contract.
//!
//! # Responsibility
//! - Define the identity, validation and patch shape every stored record
//!   implements.
//! - Provide field-level validation helpers reused by concrete records.
//!
//! # Invariants
//! - `RecordId` is stable and never reused for another record.
//! - `patched()` never changes the record id.
//! - A record passing `validate()` has every mandatory text field non-blank.

use crate::label::labelled_enum;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Separator between entries of a list field stored in one text cell.
pub const LIST_SEPARATOR: char = ';';

/// Stable identifier assigned to every record at creation.
pub type RecordId = Uuid;

labelled_enum! {
    /// Record kinds managed by the dashboard screens.
    pub enum RecordKind {
        Student => "student",
        Teacher => "teacher",
        Grade => "grade",
        Attendance => "attendance",
        Alert => "alert",
    }
}

/// Validation failure for one record value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Record id is the nil UUID.
    NilId,
    /// Mandatory text field is empty after trim.
    MissingField(&'static str),
    /// Field does not look like `local@domain.tld`.
    InvalidEmail(&'static str),
    /// Numeric field outside its inclusive range.
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// List entry contains the list separator.
    ReservedCharacter {
        field: &'static str,
        character: char,
    },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "record id must not be nil"),
            Self::MissingField(field) => write!(f, "`{field}` is required"),
            Self::InvalidEmail(field) => write!(f, "`{field}` must be an email address"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "`{field}` must be within {min}..={max}, got {value}"),
            Self::ReservedCharacter { field, character } => {
                write!(f, "`{field}` entries must not contain `{character}`")
            }
        }
    }
}

impl Error for RecordValidationError {}

/// Contract shared by every record kind held in a [`crate::RecordStore`].
pub trait Record: Clone {
    /// Partial update merged over an existing value by [`Record::patched`].
    type Patch;

    /// Kind tag used in log events and error reports.
    const KIND: RecordKind;

    /// Stable record identity.
    fn id(&self) -> RecordId;

    /// Checks mandatory fields and ranges.
    fn validate(&self) -> Result<(), RecordValidationError>;

    /// Returns a new value with every `Some` patch field applied.
    fn patched(&self, patch: &Self::Patch) -> Self;
}

pub(crate) fn require_id(id: RecordId) -> Result<(), RecordValidationError> {
    if id.is_nil() {
        return Err(RecordValidationError::NilId);
    }
    Ok(())
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), RecordValidationError> {
    if value.trim().is_empty() {
        return Err(RecordValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn require_email(field: &'static str, value: &str) -> Result<(), RecordValidationError> {
    require_text(field, value)?;
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(RecordValidationError::InvalidEmail(field));
    }
    Ok(())
}

pub(crate) fn require_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), RecordValidationError> {
    if value < min || value > max {
        return Err(RecordValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Rejects list entries holding [`LIST_SEPARATOR`].
pub(crate) fn require_list<S: AsRef<str>>(
    field: &'static str,
    values: &[S],
) -> Result<(), RecordValidationError> {
    if values
        .iter()
        .any(|value| value.as_ref().contains(LIST_SEPARATOR))
    {
        return Err(RecordValidationError::ReservedCharacter {
            field,
            character: LIST_SEPARATOR,
        });
    }
    Ok(())
}

/// Trimmed text, or `None` when blank.
pub(crate) fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Replaces an optional text field when the patch field is set; blank text
/// clears it.
pub(crate) fn merge_optional_text(target: &mut Option<String>, patch: &Option<Option<String>>) {
    if let Some(value) = patch {
        *target = value.clone().and_then(non_blank);
    }
}

/// Trims entries and drops blank ones, keeping order.
pub(crate) fn clean_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Replaces `target` when the patch field is set.
pub(crate) fn merge<T: Clone>(target: &mut T, patch: &Option<T>) {
    if let Some(value) = patch {
        *target = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::{
        clean_list, merge_optional_text, non_blank, require_email, require_list, require_range,
        require_text, RecordValidationError,
    };

    #[test]
    fn require_text_rejects_whitespace_only() {
        assert_eq!(
            require_text("name", "   ").unwrap_err(),
            RecordValidationError::MissingField("name")
        );
        assert!(require_text("name", "Ana").is_ok());
    }

    #[test]
    fn require_email_checks_shape() {
        assert!(require_email("email", "john.doe@sjcsi.edu").is_ok());
        assert_eq!(
            require_email("email", "john.doe").unwrap_err(),
            RecordValidationError::InvalidEmail("email")
        );
        assert_eq!(
            require_email("email", "").unwrap_err(),
            RecordValidationError::MissingField("email")
        );
    }

    #[test]
    fn require_range_is_inclusive() {
        assert!(require_range("quarter", 1, 1, 4).is_ok());
        assert!(require_range("quarter", 4, 1, 4).is_ok());
        let err = require_range("quarter", 5, 1, 4).unwrap_err();
        assert_eq!(err.to_string(), "`quarter` must be within 1..=4, got 5");
    }

    #[test]
    fn clean_list_drops_blank_entries() {
        assert_eq!(
            clean_list(["Algebra", " ", " Geometry "]),
            vec!["Algebra".to_string(), "Geometry".to_string()]
        );
    }

    #[test]
    fn require_list_rejects_separator_inside_entry() {
        assert!(require_list("subjects", &["Algebra", "Geometry"]).is_ok());
        assert_eq!(
            require_list("subjects", &["Math; Advanced"]).unwrap_err(),
            RecordValidationError::ReservedCharacter {
                field: "subjects",
                character: ';'
            }
        );
    }

    #[test]
    fn blank_optional_text_is_unset() {
        assert_eq!(non_blank("  "), None);
        assert_eq!(non_blank(" Sick leave "), Some("Sick leave".to_string()));

        let mut notes = Some("Sick leave".to_string());
        merge_optional_text(&mut notes, &Some(Some(String::new())));
        assert_eq!(notes, None);
        merge_optional_text(&mut notes, &None);
        assert_eq!(notes, None);
    }
}
