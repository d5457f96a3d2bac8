//! In-memory venue store.
//!
//! Stands in for the venues endpoint until the backend serves one. Seeded
//! with the stock venues; additions live for the lifetime of the store.

use chrono::Utc;
use tracing::debug;

use crate::model::Venue;

/// Mock venue persistence.
#[derive(Debug, Clone, Default)]
pub struct VenueStore {
    venues: Vec<Venue>,
    last_id: i64,
}

impl VenueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        VenueStore::default()
    }

    /// Creates a store holding the stock venues.
    pub fn seeded() -> Self {
        VenueStore {
            venues: stock_venues(),
            last_id: 0,
        }
    }

    /// All venues in insertion order.
    pub fn list(&self) -> &[Venue] {
        &self.venues
    }

    /// Looks a venue up by id.
    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id.as_deref() == Some(id))
    }

    /// Stores a venue under a fresh `venue-<millis>` id and returns it.
    ///
    /// Ids stay unique even when two venues are added in the same
    /// millisecond.
    pub fn add(&mut self, mut venue: Venue) -> &Venue {
        let now = Utc::now().timestamp_millis();
        let id = if now > self.last_id { now } else { self.last_id + 1 };
        self.last_id = id;
        venue.id = Some(format!("venue-{id}"));
        debug!(id = venue.id.as_deref(), name = %venue.name, "venue added");
        let index = self.venues.len();
        self.venues.push(venue);
        &self.venues[index]
    }

    /// Removes a venue by id.
    pub fn remove(&mut self, id: &str) -> Option<Venue> {
        let index = self.venues.iter().position(|v| v.id.as_deref() == Some(id))?;
        Some(self.venues.remove(index))
    }

    /// Number of stored venues.
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Returns `true` if the store holds no venues.
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Copies the venues out, e.g. to hand them to a view.
    pub fn snapshot(&self) -> Vec<Venue> {
        self.venues.clone()
    }
}

#[allow(clippy::too_many_arguments)]
fn venue(
    id: &str,
    name: &str,
    location: &str,
    capacity: u32,
    email: &str,
    phone: &str,
    has_parking: bool,
    is_indoor: bool,
) -> Venue {
    Venue {
        id: Some(id.to_string()),
        name: name.to_string(),
        location: location.to_string(),
        capacity,
        contact_email: Some(email.to_string()),
        contact_phone: Some(phone.to_string()),
        has_parking,
        is_indoor,
        city: location.to_string(),
    }
}

/// The stock venues the store is seeded with.
pub fn stock_venues() -> Vec<Venue> {
    vec![
        venue(
            "1",
            "Madison Square Garden",
            "New York",
            20789,
            "info@msg.com",
            "(212) 465-6741",
            true,
            true,
        ),
        venue(
            "2",
            "The Forum",
            "Los Angeles",
            17500,
            "contact@forum.com",
            "(310) 330-7300",
            true,
            true,
        ),
        venue(
            "3",
            "Red Rocks Amphitheatre",
            "Morrison",
            9525,
            "info@redrocksonline.com",
            "(720) 865-2494",
            true,
            false,
        ),
        venue(
            "4",
            "Barclays Center",
            "Brooklyn",
            19000,
            "info@barclayscenter.com",
            "(917) 618-6100",
            false,
            true,
        ),
        venue(
            "5",
            "Hollywood Bowl",
            "Los Angeles",
            17500,
            "info@hollywoodbowl.com",
            "(323) 850-2000",
            true,
            false,
        ),
    ]
}
