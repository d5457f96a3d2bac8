//! Listing records as the storefront's REST API returns them.
//!
//! Field names exposed through [`Record`] are the JSON (camelCase) names, and
//! each type carries them as associated constants so views can refer to
//! `Event::ARTIST_NAME` instead of a bare string.

use boxoffice_view::{Number, Record, Timestamp, Value};
use serde::{Deserialize, Serialize};

/// A concert listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub id: Option<u64>,
    pub title: String,
    pub genre: String,
    pub description: String,
    /// Show date as sent by the API: `YYYY-MM-DD` or an ISO datetime.
    pub date: String,
    /// Door time, free-form (`"19:30"`).
    pub time: String,
    pub image_url: Option<String>,
    pub venue_id: u64,
    pub created_by: Option<u64>,
    pub status: Option<String>,
    pub venue_name: Option<String>,
    pub venue_city: Option<String>,
    pub artist_name: Option<String>,
}

impl Event {
    pub const ID: &'static str = "id";
    pub const TITLE: &'static str = "title";
    pub const GENRE: &'static str = "genre";
    pub const DESCRIPTION: &'static str = "description";
    pub const DATE: &'static str = "date";
    pub const TIME: &'static str = "time";
    pub const IMAGE_URL: &'static str = "imageUrl";
    pub const VENUE_ID: &'static str = "venueId";
    pub const CREATED_BY: &'static str = "createdBy";
    pub const STATUS: &'static str = "status";
    pub const VENUE_NAME: &'static str = "venueName";
    pub const VENUE_CITY: &'static str = "venueCity";
    pub const ARTIST_NAME: &'static str = "artistName";

    /// The show date, if the API sent one that parses.
    pub fn starts_at(&self) -> Option<Timestamp> {
        if self.date.is_empty() {
            return None;
        }
        Timestamp::parse(&self.date).ok()
    }
}

impl Record for Event {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            Self::ID => self.id.map_or(Value::None, |id| Value::Number(Number::from(id))),
            Self::TITLE => Value::String(&self.title),
            Self::GENRE => Value::String(&self.genre),
            Self::DESCRIPTION => Value::String(&self.description),
            Self::DATE => self.starts_at().map_or(Value::None, Value::Timestamp),
            Self::TIME => Value::String(&self.time),
            Self::IMAGE_URL => self.image_url.as_deref().into(),
            Self::VENUE_ID => Value::Number(Number::from(self.venue_id)),
            Self::CREATED_BY => self
                .created_by
                .map_or(Value::None, |id| Value::Number(Number::from(id))),
            Self::STATUS => self.status.as_deref().into(),
            Self::VENUE_NAME => self.venue_name.as_deref().into(),
            Self::VENUE_CITY => self.venue_city.as_deref().into(),
            Self::ARTIST_NAME => self.artist_name.as_deref().into(),
            _ => Value::None,
        }
    }
}

/// A venue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Venue {
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub has_parking: bool,
    pub is_indoor: bool,
    pub city: String,
}

impl Venue {
    pub const ID: &'static str = "id";
    pub const NAME: &'static str = "name";
    pub const LOCATION: &'static str = "location";
    pub const CAPACITY: &'static str = "capacity";
    pub const CONTACT_EMAIL: &'static str = "contactEmail";
    pub const CONTACT_PHONE: &'static str = "contactPhone";
    pub const HAS_PARKING: &'static str = "hasParking";
    pub const IS_INDOOR: &'static str = "isIndoor";
    pub const CITY: &'static str = "city";
}

impl Record for Venue {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            Self::ID => self.id.as_deref().into(),
            Self::NAME => Value::String(&self.name),
            Self::LOCATION => Value::String(&self.location),
            Self::CAPACITY => Value::Number(Number::from(self.capacity)),
            Self::CONTACT_EMAIL => self.contact_email.as_deref().into(),
            Self::CONTACT_PHONE => self.contact_phone.as_deref().into(),
            Self::HAS_PARKING => Value::Bool(self.has_parking),
            Self::IS_INDOOR => Value::Bool(self.is_indoor),
            Self::CITY => Value::String(&self.city),
            _ => Value::None,
        }
    }
}

/// A performing artist, as shown in the featured strip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Artist {
    pub id: Option<String>,
    pub name: String,
    pub image: String,
    pub genre: Option<String>,
    pub is_featured: Option<bool>,
}

impl Artist {
    pub const NAME: &'static str = "name";
    pub const GENRE: &'static str = "genre";
    pub const IS_FEATURED: &'static str = "isFeatured";
}

impl Record for Artist {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "id" => self.id.as_deref().into(),
            Self::NAME => Value::String(&self.name),
            "image" => Value::String(&self.image),
            Self::GENRE => self.genre.as_deref().into(),
            Self::IS_FEATURED => self.is_featured.map_or(Value::None, Value::Bool),
            _ => Value::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_fields() {
        let event = Event {
            id: Some(7),
            title: "Eras Tour".into(),
            genre: "Pop".into(),
            date: "2025-08-02T00:00:00".into(),
            venue_id: 3,
            artist_name: Some("Taylor Swift".into()),
            ..Event::default()
        };

        assert_eq!(event.field(Event::ID), Value::Number(Number::U64(7)));
        assert_eq!(event.field(Event::ARTIST_NAME), Value::String("Taylor Swift"));
        assert_eq!(event.field(Event::VENUE_CITY), Value::None);
        assert_eq!(
            event.field(Event::DATE),
            Value::Timestamp(Timestamp::parse("2025-08-02").unwrap())
        );
        assert_eq!(event.field("nope"), Value::None);
    }

    #[test]
    fn unparseable_date_is_absent() {
        let event = Event {
            date: "next friday".into(),
            ..Event::default()
        };
        assert_eq!(event.field(Event::DATE), Value::None);
        assert_eq!(Event::default().starts_at(), None);
    }

    #[test]
    fn venue_fields() {
        let venue = Venue {
            name: "Red Rocks Amphitheatre".into(),
            capacity: 9525,
            has_parking: true,
            ..Venue::default()
        };
        assert_eq!(venue.field(Venue::CAPACITY), Value::Number(Number::U64(9525)));
        assert_eq!(venue.field(Venue::HAS_PARKING), Value::Bool(true));
        assert_eq!(venue.field(Venue::CONTACT_EMAIL), Value::None);
    }

    #[test]
    fn artist_fields() {
        let artist = Artist {
            name: "Drake".into(),
            is_featured: Some(true),
            ..Artist::default()
        };
        assert_eq!(artist.field(Artist::IS_FEATURED), Value::Bool(true));
        assert_eq!(artist.field(Artist::GENRE), Value::None);
    }
}
