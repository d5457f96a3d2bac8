//! Storefront listings for the boxoffice ticketing site.
//!
//! This crate holds the record types the REST API returns ([`Event`],
//! [`Venue`], [`Artist`]), decodes their payloads, keeps the mock
//! [`VenueStore`], and provides one [`ViewConfig`](boxoffice_view::ViewConfig)
//! per listing page. Filtering, sorting and paging are done by
//! [`boxoffice_view::ListView`].
//!
//! ```rust
//! use boxoffice_catalog::{presets, Venue, VenueStore};
//! use boxoffice_view::Dir;
//!
//! let store = VenueStore::seeded();
//! let mut view = presets::open_view(presets::venues_view(), store.snapshot()).unwrap();
//!
//! view.set_sort(Venue::CAPACITY, Dir::Desc);
//! let top = view.visible()[0];
//! assert_eq!(top.name, "Madison Square Garden");
//! ```

mod decode;
mod error;
mod model;
pub mod presets;
mod store;

pub use decode::{
    decode_artists, decode_events, decode_venues, load_events, load_venues, read_events,
    read_venues,
};
pub use error::{CatalogError, Result};
pub use model::{Artist, Event, Venue};
pub use store::{stock_venues, VenueStore};
