//! Core domain logic for the SchoolBoard dashboard.
//! This crate is the single source of truth for record, filter and summary
//! invariants; front ends only render what it derives.

mod label;

pub mod board;
pub mod config;
pub mod export;
pub mod filter;
pub mod logging;
pub mod model;
pub mod role;
pub mod seed;
pub mod service;
pub mod store;
pub mod summary;

pub use board::{BoardError, DashboardSummary, SchoolBoard};
pub use config::{Settings, SettingsError};
pub use export::{
    export_file_name, parse_csv, to_csv, CsvRecord, ExportError, ExportFormat, ExportResult,
    ReportConfig, ReportKind,
};
pub use filter::{derive, RecordFilter, TextQuery};
pub use label::ParseLabelError;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::record::{Record, RecordId, RecordKind, RecordValidationError};
pub use role::{CurrentUser, Role, Screen};
pub use store::record_store::{RecordStore, StoreError, StoreResult};

/// Minimal health-check API for front-end probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
