//! In-memory record stores.
//!
//! # Responsibility
//! - Hold one ordered collection per record kind.
//! - Be the only mutation entry point for those collections.
//!
//! # Invariants
//! - Writes call `Record::validate()` before touching the collection.
//! - Lookup misses are reported as values (`Ok(false)`, `None`), never as
//!   errors.

pub mod record_store;

pub use record_store::{RecordStore, StoreError, StoreResult};
