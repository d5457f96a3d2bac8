//! View configuration for each listing page.

use std::path::Path;

use boxoffice_view::{ListView, Record, SortSpec, ViewConfig};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::model::{Event, Venue};

/// Events page: search over title and artist, twelve cards per page.
///
/// The page's filter inputs map to [`Event::ARTIST_NAME`] and
/// [`Event::VENUE_CITY`] (substring) and [`Event::DATE`] (same day).
pub fn events_view() -> ViewConfig {
    ViewConfig::new()
        .with_page_size(12)
        .with_search_field(Event::TITLE)
        .with_search_field(Event::ARTIST_NAME)
}

/// Columns the venues table can sort by.
pub const VENUE_SORT_FIELDS: [&str; 3] = [Venue::NAME, Venue::LOCATION, Venue::CAPACITY];

/// Venues table: search over name and location, sorted by name.
pub fn venues_view() -> ViewConfig {
    ViewConfig::new()
        .with_page_size(25)
        .with_search_field(Venue::NAME)
        .with_search_field(Venue::LOCATION)
        .with_default_sort(SortSpec::asc(Venue::NAME))
}

/// Featured carousel: three cards, moved with the arrow buttons.
pub fn featured_view() -> ViewConfig {
    ViewConfig::new().with_page_size(3)
}

/// Reads a YAML or JSON view config, filling unspecified keys from `base`.
///
/// Keys present in the file replace the preset's values wholesale.
pub fn load_config(path: &Path, base: ViewConfig) -> Result<ViewConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|source| CatalogError::Config {
            path: path.to_path_buf(),
            source,
        })?;

    let mut merged = serde_yaml::to_value(&base).map_err(|source| CatalogError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    if let (serde_yaml::Value::Mapping(target), serde_yaml::Value::Mapping(from)) =
        (&mut merged, overrides)
    {
        for (key, value) in from {
            target.insert(key, value);
        }
    }

    let config: ViewConfig =
        serde_yaml::from_value(merged).map_err(|source| CatalogError::Config {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    debug!(path = %path.display(), page_size = config.page_size, "view config loaded");
    Ok(config)
}

/// Builds a view over `records` with `config`.
pub fn open_view<R: Record>(
    config: ViewConfig,
    records: impl IntoIterator<Item = R>,
) -> Result<ListView<R>> {
    Ok(ListView::with_source(config, records)?)
}
