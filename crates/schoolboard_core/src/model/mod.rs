//! School domain records.
//!
//! # Responsibility
//! - Define the record kinds held by the dashboard screens.
//! - Keep validation and patch-merge rules next to each record.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil `RecordId`.
//! - Updates produce a new record value; fields are never edited through the
//!   store in place.
//! - Cross-record references (`student_code`) are lookup keys only.

pub mod alert;
pub mod attendance;
pub mod grade;
pub mod record;
pub mod student;
pub mod teacher;
