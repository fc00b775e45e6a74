//! Screen models.
//!
//! # Responsibility
//! - Give each dashboard screen one owner of its records and filter.
//! - Expose screen-specific operations on top of the generic list view.
//!
//! # Invariants
//! - Screen models never share stores.
//! - Every mutation reaches `RecordStore`, so validation always runs.
//!
//! # See also
//! - `crate::board` for how the screen models are composed per session.

pub mod alerts;
pub mod attendance;
pub mod grades;
pub mod list_view;
pub mod students;
pub mod teachers;

pub use alerts::AlertService;
pub use attendance::{week_of, AttendanceService, SheetRow};
pub use grades::GradeService;
pub use list_view::ListView;
pub use students::StudentService;
pub use teachers::TeacherService;
