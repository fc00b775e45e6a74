//! Ordered in-memory store generic over record kind.
//!
//! # Responsibility
//! - Provide add/update/remove/all over one record kind.
//! - Keep insertion order stable for every read.
//!
//! # Invariants
//! - Record ids are unique within a store at all times.
//! - A rejected write leaves the store unchanged.
//! - `all()` returns a snapshot; later writes do not affect it.

use crate::filter::{derive, RecordFilter};
use crate::model::record::{Record, RecordId, RecordValidationError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store write rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Record (or merged update) failed validation.
    Validation(RecordValidationError),
    /// A record with this id is already stored.
    DuplicateId(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "record already exists: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered collection of one record kind with a single owner.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store by adding each record in order.
    ///
    /// Stops at the first rejected record.
    pub fn from_records<I>(records: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = R>,
    {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Appends a record and returns its id.
    ///
    /// # Errors
    /// - `StoreError::Validation` when the record fails `validate()`.
    /// - `StoreError::DuplicateId` when the id is already present.
    pub fn add(&mut self, record: R) -> StoreResult<RecordId> {
        let id = record.id();
        if let Err(err) = record.validate() {
            warn!(
                "event=record_add module=store status=rejected kind={} reason=validation",
                R::KIND
            );
            return Err(err.into());
        }
        if self.position(id).is_some() {
            warn!(
                "event=record_add module=store status=rejected kind={} reason=duplicate_id id={id}",
                R::KIND
            );
            return Err(StoreError::DuplicateId(id));
        }

        self.records.push(record);
        debug!(
            "event=record_add module=store status=ok kind={} id={id} len={}",
            R::KIND,
            self.records.len()
        );
        Ok(id)
    }

    /// Replaces the record at `id` with the merge of its fields and `patch`.
    ///
    /// Returns `Ok(false)` without changes when `id` is absent.
    ///
    /// # Errors
    /// - `StoreError::Validation` when the merged record is invalid.
    pub fn update(&mut self, id: RecordId, patch: &R::Patch) -> StoreResult<bool> {
        let Some(index) = self.position(id) else {
            debug!(
                "event=record_update module=store status=noop kind={} id={id}",
                R::KIND
            );
            return Ok(false);
        };

        let next = self.records[index].patched(patch);
        if let Err(err) = next.validate() {
            warn!(
                "event=record_update module=store status=rejected kind={} id={id} reason=validation",
                R::KIND
            );
            return Err(err.into());
        }

        self.records[index] = next;
        debug!(
            "event=record_update module=store status=ok kind={} id={id}",
            R::KIND
        );
        Ok(true)
    }

    /// Removes and returns the record at `id`; `None` when absent.
    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        let Some(index) = self.position(id) else {
            debug!(
                "event=record_remove module=store status=noop kind={} id={id}",
                R::KIND
            );
            return None;
        };

        let removed = self.records.remove(index);
        debug!(
            "event=record_remove module=store status=ok kind={} id={id} len={}",
            R::KIND,
            self.records.len()
        );
        Some(removed)
    }

    /// Snapshot of every record in insertion order.
    pub fn all(&self) -> Vec<R> {
        self.records.clone()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// First record, in store order, satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&R>
    where
        P: FnMut(&R) -> bool,
    {
        self.records.iter().find(|record| predicate(record))
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `filter`, in store order.
    pub fn derive<F>(&self, filter: &F) -> Vec<R>
    where
        F: RecordFilter<R> + ?Sized,
    {
        derive(&self.records, filter)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordStore, StoreError};
    use crate::model::record::RecordValidationError;
    use crate::model::student::{Student, StudentPatch};

    fn student(code: &str, name: &str) -> Student {
        Student::new(code, name, format!("{}@sjcsi.edu", code.to_ascii_lowercase()))
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = RecordStore::new();
        let first = store.add(student("STU001", "John Doe")).unwrap();
        let second = store.add(student("STU002", "Jane Smith")).unwrap();

        let ids: Vec<_> = store.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn add_rejects_duplicate_id_and_keeps_store() {
        let mut store = RecordStore::new();
        let record = student("STU001", "John Doe");
        store.add(record.clone()).unwrap();

        let err = store.add(record.clone()).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(record.id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_missing_mandatory_field() {
        let mut store = RecordStore::new();
        let err = store.add(student("STU001", "  ")).unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation(RecordValidationError::MissingField("name"))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn update_invalid_merge_leaves_record_untouched() {
        let mut store = RecordStore::new();
        let id = store.add(student("STU001", "John Doe")).unwrap();

        let patch = StudentPatch {
            email: Some(String::new()),
            ..StudentPatch::default()
        };
        assert!(store.update(id, &patch).is_err());
        assert_eq!(store.get(id).unwrap().email, "stu001@sjcsi.edu");
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let mut store = RecordStore::new();
        let id = store.add(student("STU001", "John Doe")).unwrap();
        let snapshot = store.all();

        store.remove(id);
        assert_eq!(snapshot.len(), 1);
        assert!(store.is_empty());
    }
}
