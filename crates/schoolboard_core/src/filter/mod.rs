//! Filter predicates and derived views.
//!
//! # Responsibility
//! - Express each screen's current filter values as a typed predicate set.
//! - Derive the visible subset of a record list from those predicates.
//!
//! # Invariants
//! - Predicates combine with logical AND; an unset predicate matches all.
//! - Text search is a case-insensitive substring test, OR-combined across the
//!   fields a filter searches.
//! - `derive` preserves input order and never fails.

mod screens;

pub use screens::{AlertFilter, AttendanceFilter, GradeFilter, Resolution, StudentFilter, TeacherFilter};

/// Predicate over one record kind.
pub trait RecordFilter<R> {
    /// Returns whether `record` satisfies every active predicate.
    fn matches(&self, record: &R) -> bool;

    /// Combines two filters with logical AND.
    fn and<F>(self, other: F) -> And<Self, F>
    where
        Self: Sized,
        F: RecordFilter<R>,
    {
        And(self, other)
    }
}

impl<R, F: RecordFilter<R> + ?Sized> RecordFilter<R> for &F {
    fn matches(&self, record: &R) -> bool {
        (**self).matches(record)
    }
}

/// Conjunction of two filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B>(pub A, pub B);

impl<R, A, B> RecordFilter<R> for And<A, B>
where
    A: RecordFilter<R>,
    B: RecordFilter<R>,
{
    fn matches(&self, record: &R) -> bool {
        self.0.matches(record) && self.1.matches(record)
    }
}

/// Ad-hoc filter from a closure.
#[derive(Debug, Clone, Copy)]
pub struct Where<P>(pub P);

impl<R, P> RecordFilter<R> for Where<P>
where
    P: Fn(&R) -> bool,
{
    fn matches(&self, record: &R) -> bool {
        (self.0)(record)
    }
}

/// Filter that matches every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchAll;

impl<R> RecordFilter<R> for MatchAll {
    fn matches(&self, _record: &R) -> bool {
        true
    }
}

/// Records from `records` satisfying `filter`, in input order.
pub fn derive<R, F>(records: &[R], filter: &F) -> Vec<R>
where
    R: Clone,
    F: RecordFilter<R> + ?Sized,
{
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Case-insensitive free-text search value.
///
/// Surrounding whitespace is ignored; a blank query is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            needle: text.as_ref().trim().to_lowercase(),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.needle.is_empty()
    }

    /// Normalized (trimmed, lowercased) query text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Whether any of `fields` contains the query; always true when unset.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_unset() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(self.needle.as_str()))
    }
}

/// Exact-match categorical predicate; `None` matches everything.
pub(crate) fn choice_matches<T: PartialEq + ?Sized>(choice: Option<&T>, value: &T) -> bool {
    choice.map_or(true, |expected| expected == value)
}
