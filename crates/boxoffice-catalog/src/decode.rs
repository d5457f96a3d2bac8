//! Decoding listing payloads.
//!
//! The API returns listings as a JSON array. A payload that fails to decode
//! is reported as [`CatalogError::LoadFailed`] as a whole.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::model::{Artist, Event, Venue};

/// Decodes an events payload.
pub fn decode_events(payload: &str) -> Result<Vec<Event>> {
    decode(payload, "events")
}

/// Decodes a venues payload.
pub fn decode_venues(payload: &str) -> Result<Vec<Venue>> {
    decode(payload, "venues")
}

/// Decodes an artists payload.
pub fn decode_artists(payload: &str) -> Result<Vec<Artist>> {
    decode(payload, "artists")
}

/// Decodes an events payload from a reader.
pub fn read_events(reader: impl Read) -> Result<Vec<Event>> {
    read(reader, "events")
}

/// Decodes a venues payload from a reader.
pub fn read_venues(reader: impl Read) -> Result<Vec<Venue>> {
    read(reader, "venues")
}

/// Reads and decodes an events file.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    read_events(open(path)?)
}

/// Reads and decodes a venues file.
pub fn load_venues(path: &Path) -> Result<Vec<Venue>> {
    read_venues(open(path)?)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn decode<T: DeserializeOwned>(payload: &str, what: &'static str) -> Result<Vec<T>> {
    finish(serde_json::from_str(payload), what)
}

fn read<T: DeserializeOwned>(reader: impl Read, what: &'static str) -> Result<Vec<T>> {
    finish(serde_json::from_reader(reader), what)
}

fn finish<T>(decoded: serde_json::Result<Vec<T>>, what: &'static str) -> Result<Vec<T>> {
    match decoded {
        Ok(records) => {
            debug!(what, count = records.len(), "decoded listing");
            Ok(records)
        }
        Err(source) => {
            warn!(what, error = %source, "listing payload rejected");
            Err(CatalogError::LoadFailed { what, source })
        }
    }
}
