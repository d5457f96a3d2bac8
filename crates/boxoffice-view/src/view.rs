//! The list view engine.
//!
//! A [`ListView`] owns a source collection and the controls applied to it:
//! field predicates, a free-text search, a sort spec and a window. Every
//! mutating call recomputes the matched sequence before returning, so reads
//! are always consistent with the latest inputs:
//!
//! ```text
//! visible = window(sort(filter(source)))
//! ```

use tracing::{debug, trace};

use crate::config::ViewConfig;
use crate::error::{Result, ViewError};
use crate::filter::{FilterValue, Predicate, Search};
use crate::ordering::{Dir, SortKey, SortSpec};
use crate::state::ViewState;
use crate::traits::Record;
use crate::window::Window;

/// Filter, sort and window state for one listing.
///
/// # Example
///
/// ```
/// use boxoffice_view::{Dir, ListView, Number, Record, Value, ViewConfig};
///
/// struct Venue {
///     name: &'static str,
///     capacity: u32,
/// }
///
/// impl Record for Venue {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(self.name),
///             "capacity" => Value::Number(Number::from(self.capacity)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let mut view = ListView::new(
///     ViewConfig::new().with_page_size(2).with_search_field("name"),
/// )
/// .unwrap();
/// view.set_source(vec![
///     Venue { name: "Madison Square Garden", capacity: 20789 },
///     Venue { name: "The Forum", capacity: 17500 },
///     Venue { name: "Red Rocks Amphitheatre", capacity: 9525 },
/// ]);
///
/// view.set_sort("capacity", Dir::Asc);
/// let names: Vec<_> = view.visible().iter().map(|v| v.name).collect();
/// assert_eq!(names, ["Red Rocks Amphitheatre", "The Forum"]);
///
/// view.advance_window(1);
/// assert_eq!(view.state().start, 1);
/// assert!(!view.state().has_next);
/// ```
#[derive(Debug, Clone)]
pub struct ListView<R> {
    config: ViewConfig,
    source: Vec<R>,
    filters: Vec<Predicate>,
    search: Search,
    sort: Option<SortSpec>,
    window: Window,
    /// Source indices of the matched records, in display order.
    matched: Vec<usize>,
}

impl<R: Record> ListView<R> {
    /// Creates an empty view.
    ///
    /// Fails if the configuration is invalid (page size of zero).
    pub fn new(config: ViewConfig) -> Result<Self> {
        config.validate()?;
        Ok(ListView {
            search: Search::new(config.search_fields.iter().cloned()),
            sort: config.default_sort.clone(),
            window: Window::new(config.page_size),
            config,
            source: Vec::new(),
            filters: Vec::new(),
            matched: Vec::new(),
        })
    }

    /// Creates a view already holding `records`.
    pub fn with_source(config: ViewConfig, records: impl IntoIterator<Item = R>) -> Result<Self> {
        let mut view = ListView::new(config)?;
        view.set_source(records);
        Ok(view)
    }

    // ========================================================================
    // Source
    // ========================================================================

    /// Replaces the source collection and moves the window to the start.
    ///
    /// Filters, search and sort are kept.
    pub fn set_source(&mut self, records: impl IntoIterator<Item = R>) {
        self.source = records.into_iter().collect();
        self.window.reset();
        self.recompute();
    }

    /// Replaces the source and resets every control to its configured
    /// default, as when a page is freshly mounted.
    pub fn reload(&mut self, records: impl IntoIterator<Item = R>) {
        self.filters.clear();
        self.search.clear();
        self.sort = self.config.default_sort.clone();
        self.source = records.into_iter().collect();
        self.window.reset();
        self.recompute();
    }

    /// Takes the source collection out, leaving the view empty.
    pub fn take_source(&mut self) -> Vec<R> {
        let source = std::mem::take(&mut self.source);
        self.window.reset();
        self.recompute();
        source
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Sets the filter on `field`, replacing any previous one.
    ///
    /// An empty value clears the field's filter instead of matching nothing.
    /// The window moves back to the start.
    pub fn set_filter(&mut self, field: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        if value.is_inert() {
            self.filters.retain(|p| p.field != field);
            trace!(field, "filter cleared");
        } else {
            trace!(field, mode = ?value.mode(), "filter set");
            let predicate = Predicate::new(field, value);
            match self.filters.iter_mut().find(|p| p.field == field) {
                Some(existing) => *existing = predicate,
                None => self.filters.push(predicate),
            }
        }
        self.window.reset();
        self.recompute();
    }

    /// Removes the filter on `field`, if any. The window moves back to the
    /// start.
    pub fn clear_filter(&mut self, field: &str) {
        self.set_filter(field, FilterValue::Empty);
    }

    /// Sets the free-text search. An empty query clears it. The window moves
    /// back to the start.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
        trace!(query = self.search.query(), "search set");
        self.window.reset();
        self.recompute();
    }

    /// Clears every filter and the search. Sort is kept.
    pub fn reset_filters(&mut self) {
        self.filters.clear();
        self.search.clear();
        self.window.reset();
        self.recompute();
    }

    // ========================================================================
    // Sort
    // ========================================================================

    /// Sorts by `field` in direction `dir`. The window position is kept.
    pub fn set_sort(&mut self, field: &str, dir: Dir) {
        self.sort = Some(SortSpec::new(field, dir));
        self.recompute();
    }

    /// Flips the direction if `field` is the active sort, otherwise sorts by
    /// `field` ascending. The window position is kept.
    pub fn toggle_sort(&mut self, field: &str) {
        let dir = match &self.sort {
            Some(spec) if spec.field == field => spec.dir.flip(),
            _ => Dir::Asc,
        };
        self.set_sort(field, dir);
    }

    /// Drops the sort; records return to source order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.recompute();
    }

    // ========================================================================
    // Window
    // ========================================================================

    /// Moves the window by `delta` pages. Out-of-range moves clamp.
    pub fn advance_window(&mut self, delta: isize) {
        self.window.advance(delta, self.matched.len());
        trace!(start = self.window.start(), "window moved");
    }

    /// Moves the window to start at `start`, clamped.
    pub fn seek(&mut self, start: usize) {
        self.window.seek(start, self.matched.len());
    }

    /// Changes the number of records per window.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize(page_size));
        }
        self.config.page_size = page_size;
        self.window.resize(page_size, self.matched.len());
        Ok(())
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The records in the current window, in display order.
    pub fn visible(&self) -> Vec<&R> {
        self.matched[self.window.range(self.matched.len())]
            .iter()
            .map(|&i| &self.source[i])
            .collect()
    }

    /// Every record passing the filters, in display order.
    pub fn matched(&self) -> Vec<&R> {
        self.matched.iter().map(|&i| &self.source[i]).collect()
    }

    /// Number of records passing the filters.
    pub fn matched_len(&self) -> usize {
        self.matched.len()
    }

    /// The source collection in its original order.
    pub fn source(&self) -> &[R] {
        &self.source
    }

    /// The active predicates, in the order they were first set.
    pub fn filters(&self) -> &[Predicate] {
        &self.filters
    }

    /// The current search query.
    pub fn search(&self) -> &str {
        self.search.query()
    }

    /// The active sort.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// The current window.
    pub fn window(&self) -> Window {
        self.window
    }

    /// The configuration the view was created with.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Summary for rendering controls.
    pub fn state(&self) -> ViewState {
        let len = self.matched.len();
        ViewState {
            total: self.source.len(),
            matched: len,
            start: self.window.start(),
            page_size: self.window.page_size(),
            page: self.window.page(len),
            page_count: self.window.page_count(len),
            has_prev: self.window.has_prev(),
            has_next: self.window.has_next(len),
            search: self.search.query().to_string(),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
        }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Tests a record against the search and every predicate.
    pub fn accepts(&self, record: &R) -> bool {
        self.search.matches(record) && self.filters.iter().all(|p| p.matches_record(record))
    }

    fn recompute(&mut self) {
        let mut matched: Vec<usize> = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, record)| self.accepts(record))
            .map(|(i, _)| i)
            .collect();

        if let Some(spec) = &self.sort {
            let mut keyed: Vec<(SortKey, usize)> = matched
                .iter()
                .map(|&i| (spec.key(&self.source[i]), i))
                .collect();
            // Stable: equal keys keep source order.
            keyed.sort_by(|a, b| spec.compare_keys(&a.0, &b.0));
            matched = keyed.into_iter().map(|(_, i)| i).collect();
        }

        self.matched = matched;
        self.window.clamp(self.matched.len());

        debug!(
            total = self.source.len(),
            matched = self.matched.len(),
            start = self.window.start(),
            "view recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Timestamp, Value};

    #[derive(Debug, Clone, PartialEq)]
    struct Show {
        title: &'static str,
        genre: &'static str,
        city: Option<&'static str>,
        date: Timestamp,
        price: f64,
    }

    impl Record for Show {
        fn field(&self, name: &str) -> Value<'_> {
            match name {
                "title" => Value::String(self.title),
                "genre" => Value::String(self.genre),
                "city" => self.city.into(),
                "date" => Value::Timestamp(self.date),
                "price" => Value::Number(Number::F64(self.price)),
                _ => Value::None,
            }
        }
    }

    fn day(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn shows() -> Vec<Show> {
        vec![
            Show {
                title: "After Hours",
                genre: "Pop",
                city: Some("Los Angeles"),
                date: day("2025-07-01T20:00:00Z"),
                price: 120.0,
            },
            Show {
                title: "Blue Note Sessions",
                genre: "Jazz",
                city: Some("New York"),
                date: day("2025-07-02T19:30:00Z"),
                price: 45.0,
            },
            Show {
                title: "Canyon Echoes",
                genre: "Rock",
                city: None,
                date: day("2025-07-01T18:00:00Z"),
                price: 60.0,
            },
            Show {
                title: "Downtown Drift",
                genre: "Rock",
                city: Some("New Orleans"),
                date: day("2025-07-03T21:00:00Z"),
                price: 75.5,
            },
        ]
    }

    fn view(page_size: usize) -> ListView<Show> {
        ListView::with_source(
            ViewConfig::new()
                .with_page_size(page_size)
                .with_search_field("title")
                .with_search_field("genre"),
            shows(),
        )
        .unwrap()
    }

    fn titles(records: &[&Show]) -> Vec<&'static str> {
        records.iter().map(|s| s.title).collect()
    }

    #[test]
    fn zero_page_size_rejected() {
        let err = ListView::<Show>::new(ViewConfig::new().with_page_size(0)).unwrap_err();
        assert!(matches!(err, ViewError::InvalidPageSize(0)));

        let mut v = view(2);
        assert!(v.set_page_size(0).is_err());
        assert_eq!(v.state().page_size, 2);
    }

    #[test]
    fn unfiltered_view_keeps_source_order() {
        let v = view(10);
        assert_eq!(
            titles(&v.visible()),
            ["After Hours", "Blue Note Sessions", "Canyon Echoes", "Downtown Drift"]
        );
    }

    #[test]
    fn filter_upsert_replaces() {
        let mut v = view(10);
        v.set_filter("genre", "rock");
        assert_eq!(v.matched_len(), 2);
        v.set_filter("genre", "jazz");
        assert_eq!(titles(&v.matched()), ["Blue Note Sessions"]);
        assert_eq!(v.filters().len(), 1);
    }

    #[test]
    fn absent_field_not_excluded() {
        let mut v = view(10);
        v.set_filter("city", "new");
        assert_eq!(
            titles(&v.matched()),
            ["Blue Note Sessions", "Canyon Echoes", "Downtown Drift"]
        );
    }

    #[test]
    fn date_filter_matches_day() {
        let mut v = view(10);
        v.set_filter("date", FilterValue::date("2025-07-01").unwrap());
        assert_eq!(titles(&v.matched()), ["After Hours", "Canyon Echoes"]);
    }

    #[test]
    fn range_filter() {
        let mut v = view(10);
        v.set_filter("price", FilterValue::range(50, 100));
        assert_eq!(titles(&v.matched()), ["Canyon Echoes", "Downtown Drift"]);
    }

    #[test]
    fn search_composes_with_filters() {
        let mut v = view(10);
        v.set_search("ROCK");
        assert_eq!(v.matched_len(), 2);
        v.set_filter("city", "orleans");
        // Canyon Echoes has no city, so the city filter does not drop it.
        assert_eq!(titles(&v.matched()), ["Canyon Echoes", "Downtown Drift"]);
        v.set_search("drift");
        assert_eq!(titles(&v.matched()), ["Downtown Drift"]);
    }

    #[test]
    fn filter_change_resets_window() {
        let mut v = view(1);
        v.advance_window(2);
        assert_eq!(v.state().start, 2);
        v.set_filter("genre", "o");
        assert_eq!(v.state().start, 0);
    }

    #[test]
    fn sort_keeps_window() {
        let mut v = view(2);
        v.advance_window(1);
        assert_eq!(v.state().start, 2);
        v.set_sort("price", Dir::Desc);
        assert_eq!(v.state().start, 2);
        assert_eq!(titles(&v.visible()), ["Canyon Echoes", "Blue Note Sessions"]);
    }

    #[test]
    fn toggle_sort_cycles() {
        let mut v = view(10);
        v.toggle_sort("title");
        assert_eq!(v.sort(), Some(&SortSpec::asc("title")));
        v.toggle_sort("title");
        assert_eq!(v.sort(), Some(&SortSpec::desc("title")));
        assert_eq!(titles(&v.visible())[0], "Downtown Drift");
        v.toggle_sort("price");
        assert_eq!(v.sort(), Some(&SortSpec::asc("price")));
        assert_eq!(v.state().sort_indicator("price"), Some(Dir::Asc));
        assert_eq!(v.state().sort_indicator("title"), None);
    }

    #[test]
    fn clear_sort_restores_source_order() {
        let mut v = view(10);
        v.set_sort("price", Dir::Asc);
        v.clear_sort();
        assert_eq!(titles(&v.matched())[0], "After Hours");
    }

    #[test]
    fn reset_filters_keeps_sort() {
        let mut v = view(10);
        v.set_sort("price", Dir::Asc);
        v.set_search("rock");
        v.set_filter("city", "new");
        v.reset_filters();
        let state = v.state();
        assert!(!state.is_filtered());
        assert_eq!(state.matched, 4);
        assert_eq!(state.sort, Some(SortSpec::asc("price")));
    }

    #[test]
    fn set_source_keeps_controls() {
        let mut v = view(1);
        v.set_filter("genre", "rock");
        v.advance_window(1);
        v.set_source(shows());
        assert_eq!(v.state().start, 0);
        assert_eq!(v.matched_len(), 2);
    }

    #[test]
    fn reload_resets_to_defaults() {
        let mut v = ListView::with_source(
            ViewConfig::new()
                .with_page_size(1)
                .with_default_sort(SortSpec::desc("date")),
            shows(),
        )
        .unwrap();
        assert_eq!(titles(&v.visible()), ["Downtown Drift"]);

        v.set_sort("title", Dir::Asc);
        v.set_filter("genre", "pop");
        v.set_search("after");
        v.reload(shows());

        let state = v.state();
        assert_eq!(state.sort, Some(SortSpec::desc("date")));
        assert!(state.filters.is_empty());
        assert!(state.search.is_empty());
        assert_eq!(state.matched, 4);
    }

    #[test]
    fn state_for_controls() {
        let mut v = view(3);
        let state = v.state();
        assert_eq!(state.total, 4);
        assert!(!state.has_prev);
        assert!(state.has_next);
        assert_eq!(state.showing(), Some((1, 3)));

        v.advance_window(1);
        let state = v.state();
        assert_eq!(state.start, 1);
        assert!(state.has_prev);
        assert!(!state.has_next);
        assert_eq!(state.page, 2);
        assert_eq!(state.page_count, 2);
        assert_eq!(state.showing(), Some((2, 4)));

        v.set_search("nothing like this");
        let state = v.state();
        assert_eq!(state.showing(), None);
        assert_eq!(state.page, 0);
        assert!(!state.has_prev);
    }

    #[test]
    fn take_source_empties_view() {
        let mut v = view(2);
        let records = v.take_source();
        assert_eq!(records.len(), 4);
        assert!(v.visible().is_empty());
        assert_eq!(v.state().total, 0);
    }

    #[test]
    fn set_page_size_reclamps() {
        let mut v = view(1);
        v.seek(3);
        assert_eq!(v.state().start, 3);
        v.set_page_size(3).unwrap();
        assert_eq!(v.state().start, 1);
        assert_eq!(v.visible().len(), 3);
    }
}
