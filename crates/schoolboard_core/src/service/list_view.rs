//! Generic filterable record list backing every screen model.
//!
//! # Responsibility
//! - Pair one record store with the screen's current predicate set.
//! - Recompute the visible list on every read.
//!
//! # Invariants
//! - Mutations go through `RecordStore`; the view never caches results.
//! - Changing the filter never changes the stored records.

use crate::export::{to_csv, CsvRecord, ExportResult};
use crate::filter::RecordFilter;
use crate::model::record::{Record, RecordId};
use crate::store::record_store::{RecordStore, StoreResult};

/// Store plus current filter for one screen.
#[derive(Debug, Clone)]
pub struct ListView<R: Record, F> {
    store: RecordStore<R>,
    filter: F,
}

impl<R: Record, F: Default> Default for ListView<R, F> {
    fn default() -> Self {
        Self {
            store: RecordStore::new(),
            filter: F::default(),
        }
    }
}

impl<R, F> ListView<R, F>
where
    R: Record,
    F: RecordFilter<R> + Default,
{
    /// Empty list with a cleared filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store with a cleared filter.
    pub fn from_store(store: RecordStore<R>) -> Self {
        Self {
            store,
            filter: F::default(),
        }
    }

    /// Seeds a list through `RecordStore::add`.
    pub fn from_records<I>(records: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = R>,
    {
        Ok(Self::from_store(RecordStore::from_records(records)?))
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
    }

    /// Resets every predicate to unset.
    pub fn clear_filter(&mut self) {
        self.filter = F::default();
    }

    /// Records passing the current filter, in store order.
    pub fn visible(&self) -> Vec<R> {
        self.store.derive(&self.filter)
    }

    pub fn visible_count(&self) -> usize {
        self.store
            .iter()
            .filter(|record| self.filter.matches(record))
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.store.len()
    }

    pub fn all(&self) -> Vec<R> {
        self.store.all()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.store.get(id)
    }

    pub fn add(&mut self, record: R) -> StoreResult<RecordId> {
        self.store.add(record)
    }

    pub fn update(&mut self, id: RecordId, patch: &R::Patch) -> StoreResult<bool> {
        self.store.update(id, patch)
    }

    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        self.store.remove(id)
    }

    /// Every stored record as delimited text, regardless of the filter.
    pub fn export_csv(&self) -> ExportResult<String>
    where
        R: CsvRecord,
    {
        to_csv(self.store.as_slice())
    }

    /// Records passing the current filter as delimited text.
    pub fn export_visible_csv(&self) -> ExportResult<String>
    where
        R: CsvRecord,
    {
        to_csv(&self.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::ListView;
    use crate::filter::{StudentFilter, TextQuery};
    use crate::model::student::Student;

    fn roster() -> ListView<Student, StudentFilter> {
        ListView::from_records([
            Student::new("STU001", "John Doe", "john.doe@sjcsi.edu"),
            Student::new("STU002", "Jane Smith", "jane.smith@sjcsi.edu").in_class("8", "B"),
        ])
        .unwrap()
    }

    #[test]
    fn filter_changes_view_not_store() {
        let mut view = roster();
        view.filter_mut().grade_level = Some("8".to_string());
        assert_eq!(view.visible_count(), 1);
        assert_eq!(view.visible()[0].name, "Jane Smith");
        assert_eq!(view.total_count(), 2);

        view.clear_filter();
        assert_eq!(view.visible().len(), 2);
    }

    #[test]
    fn visible_export_respects_filter() {
        let mut view = roster();
        view.set_filter(StudentFilter {
            search: TextQuery::new("john"),
            ..StudentFilter::default()
        });
        let visible = view.export_visible_csv().unwrap();
        let all = view.export_csv().unwrap();
        assert_eq!(visible.lines().count(), 2);
        assert_eq!(all.lines().count(), 3);
    }
}
