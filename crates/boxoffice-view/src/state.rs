//! Snapshot of a view's controls for rendering.

use serde::Serialize;

use crate::filter::Predicate;
use crate::ordering::{Dir, SortSpec};

/// What the search box, filter inputs, sort headers and pager need to
/// render their current and disabled states.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Records in the source collection.
    pub total: usize,
    /// Records passing every filter.
    pub matched: usize,
    /// Index of the first visible record within the matched sequence.
    pub start: usize,
    pub page_size: usize,
    /// 1-based page number, 0 when nothing matched.
    pub page: usize,
    pub page_count: usize,
    /// The "previous" control is enabled exactly when this is `true`.
    pub has_prev: bool,
    pub has_next: bool,
    pub search: String,
    pub filters: Vec<Predicate>,
    pub sort: Option<SortSpec>,
}

impl ViewState {
    /// Direction marker for a sortable column, if it is the active sort.
    pub fn sort_indicator(&self, field: &str) -> Option<Dir> {
        self.sort
            .as_ref()
            .filter(|spec| spec.field == field)
            .map(|spec| spec.dir)
    }

    /// The active predicate on `field`, if any.
    pub fn filter(&self, field: &str) -> Option<&Predicate> {
        self.filters.iter().find(|p| p.field == field)
    }

    /// Returns `true` if any filter or the search is active.
    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty() || !self.search.is_empty()
    }

    /// Range of visible positions, 1-based and inclusive, for
    /// "Showing 4–6 of 7" labels. `None` when nothing matched.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.matched == 0 {
            return None;
        }
        let end = (self.start + self.page_size).min(self.matched);
        Some((self.start + 1, end))
    }
}
