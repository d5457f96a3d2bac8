//! Filter, sort and pagination-window engine for listing pages.
//!
//! A [`ListView`] holds a collection of records and derives the slice a page
//! shows from it:
//!
//! - field predicates: case-insensitive substring, same-day date, numeric
//!   range ([`FilterValue`])
//! - a free-text search across several string fields ([`ViewConfig::search_fields`])
//! - a single stable sort ([`SortSpec`])
//! - a window of `page_size` records that moves a page at a time and clamps
//!   at both ends ([`Window`])
//!
//! The engine is generic over any type implementing [`Record`], which only
//! needs to look up field values by name.
//!
//! # Quick Start
//!
//! ```rust
//! use boxoffice_view::{Dir, ListView, Record, Value, ViewConfig};
//!
//! struct Event {
//!     title: String,
//!     genre: String,
//! }
//!
//! impl Record for Event {
//!     fn field(&self, name: &str) -> Value<'_> {
//!         match name {
//!             "title" => Value::String(&self.title),
//!             "genre" => Value::String(&self.genre),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let events = ["Rock", "Pop", "Rock", "Jazz", "Rock"]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, genre)| Event { title: format!("Show {i}"), genre: genre.to_string() });
//!
//! let mut view = ListView::with_source(ViewConfig::new().with_search_field("title"), events)
//!     .unwrap();
//!
//! view.set_filter("genre", "rock");
//! let titles: Vec<_> = view.visible().iter().map(|e| e.title.as_str()).collect();
//! assert_eq!(titles, ["Show 0", "Show 2", "Show 4"]);
//!
//! // An empty value clears the filter rather than hiding everything.
//! view.set_filter("genre", "");
//! assert_eq!(view.matched_len(), 5);
//!
//! view.set_sort("title", Dir::Desc);
//! assert_eq!(view.visible()[0].title, "Show 4");
//! ```
//!
//! # Semantics
//!
//! ```text
//! match = search matches (or is empty)
//!       ∧ every non-empty predicate matches
//! ```
//!
//! A record whose filtered field is absent is not excluded by that
//! predicate. In sorting, absent fields come before present values in
//! ascending order.

mod config;
mod error;
mod filter;
mod json;
mod ordering;
mod state;
mod traits;
mod value;
mod view;
mod window;

pub use config::{ViewConfig, DEFAULT_PAGE_SIZE};
pub use error::{Result, ViewError};
pub use filter::{FilterValue, MatchMode, Predicate, Search};
pub use ordering::{compare_values, Dir, SortKey, SortSpec};
pub use state::ViewState;
pub use traits::Record;
pub use value::{Number, Timestamp, Value};
pub use view::ListView;
pub use window::Window;
