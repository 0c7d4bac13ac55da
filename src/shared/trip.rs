//! Trip Data Structures
//!
//! Persisted trips, the create payload, and the query parameters accepted by
//! the listing endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;

use crate::shared::error::SharedError;

/// Longest accepted trip title
pub const MAX_TITLE_LEN: usize = 100;

/// One stop of an itinerary
///
/// Keys beyond `name`, `order` and `arrival` are kept as sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Trip as stored in the `trips` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Trip {
    pub id: i64,
    pub owner_id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub duration: i64,
    pub cities: Json<Vec<CityEntry>>,
    pub style_tags: Json<Vec<String>>,
    pub settings: Json<Map<String, Value>>,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

/// Trip creation request
///
/// `owner_id` is accepted for compatibility but always replaced by the
/// authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCreate {
    pub title: String,
    pub start_date: NaiveDate,
    pub duration: i64,
    pub cities: Vec<CityEntry>,
    pub style_tags: Vec<String>,
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub owner_id: Option<String>,
}

impl TripCreate {
    /// Check field constraints that the type system cannot express
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.duration <= 0 {
            return Err(SharedError::validation("duration", "must be greater than 0"));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(SharedError::validation(
                "title",
                format!("must be at most {MAX_TITLE_LEN} characters"),
            ));
        }
        Ok(())
    }
}

/// Trip response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripResponse {
    pub id: i64,
    pub owner_id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub duration: i64,
    pub cities: Vec<CityEntry>,
    pub style_tags: Vec<String>,
    pub settings: Map<String, Value>,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            owner_id: trip.owner_id,
            title: trip.title,
            start_date: trip.start_date,
            duration: trip.duration,
            cities: trip.cities.0,
            style_tags: trip.style_tags.0,
            settings: trip.settings.0,
            is_pinned: trip.is_pinned,
            created_at: trip.created_at,
        }
    }
}

/// Raw query string of `GET /trips/list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripListQuery {
    pub filter_type: Option<String>,
    pub filter_value: Option<String>,
    pub sort_by: Option<String>,
}

/// Filter applied to a trip listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripFilter {
    Owner(String),
    Pinned(bool),
}

impl TripFilter {
    /// Interpret a `filter_type`/`filter_value` pair
    ///
    /// Both halves must be present and non-empty; unknown types yield no
    /// filter. For `is_pinned`, only `"true"` (any case) means pinned.
    pub fn parse(filter_type: Option<&str>, filter_value: Option<&str>) -> Option<Self> {
        let (kind, value) = match (filter_type, filter_value) {
            (Some(kind), Some(value)) if !kind.is_empty() && !value.is_empty() => (kind, value),
            _ => return None,
        };
        match kind {
            "owner_id" => Some(Self::Owner(value.to_string())),
            "is_pinned" => Some(Self::Pinned(value.eq_ignore_ascii_case("true"))),
            _ => None,
        }
    }
}

/// Ordering applied to a trip listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    StartDateAsc,
    StartDateDesc,
}

impl SortOrder {
    /// `start_date` and `-start_date` are the only recognized keys
    pub fn parse(sort_by: Option<&str>) -> Option<Self> {
        match sort_by? {
            "start_date" => Some(Self::StartDateAsc),
            "-start_date" => Some(Self::StartDateDesc),
            _ => None,
        }
    }
}

impl TripListQuery {
    pub fn filter(&self) -> Option<TripFilter> {
        TripFilter::parse(self.filter_type.as_deref(), self.filter_value.as_deref())
    }

    pub fn sort(&self) -> Option<SortOrder> {
        SortOrder::parse(self.sort_by.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_create() -> TripCreate {
        serde_json::from_value(serde_json::json!({
            "title": "Kyoto in autumn",
            "start_date": "2025-11-02",
            "duration": 5,
            "cities": [{"name": "Kyoto", "order": 1, "arrival": "2025-11-02T09:00:00", "note": "ryokan"}],
            "style_tags": ["culture", "food"],
            "settings": {"transport_priority": "rail"}
        }))
        .unwrap()
    }

    #[test]
    fn test_city_entry_keeps_unknown_keys() {
        let trip = sample_create();
        let city = &trip.cities[0];
        assert_eq!(city.name, "Kyoto");
        assert_eq!(city.order, Some(1));
        assert_eq!(city.extra.get("note"), Some(&Value::from("ryokan")));

        let json = serde_json::to_value(city).unwrap();
        assert_eq!(json["note"], "ryokan");
    }

    #[test]
    fn test_validate_rejects_non_positive_duration() {
        let mut trip = sample_create();
        assert!(trip.validate().is_ok());

        trip.duration = 0;
        assert_eq!(trip.validate().unwrap_err().field(), "duration");
        trip.duration = -3;
        assert!(trip.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_long_title() {
        let mut trip = sample_create();
        trip.title = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(trip.validate().unwrap_err().field(), "title");
    }

    #[test]
    fn test_validate_accepts_blank_title() {
        let mut trip = sample_create();
        trip.title = String::new();
        assert!(trip.validate().is_ok());
        trip.title = "   ".to_string();
        assert!(trip.validate().is_ok());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(
            TripFilter::parse(Some("owner_id"), Some("abc")),
            Some(TripFilter::Owner("abc".to_string()))
        );
        assert_eq!(TripFilter::parse(Some("is_pinned"), Some("TRUE")), Some(TripFilter::Pinned(true)));
        assert_eq!(TripFilter::parse(Some("is_pinned"), Some("yes")), Some(TripFilter::Pinned(false)));
        assert_eq!(TripFilter::parse(Some("is_pinned"), None), None);
        assert_eq!(TripFilter::parse(None, Some("true")), None);
        assert_eq!(TripFilter::parse(Some("title"), Some("x")), None);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(SortOrder::parse(Some("start_date")), Some(SortOrder::StartDateAsc));
        assert_eq!(SortOrder::parse(Some("-start_date")), Some(SortOrder::StartDateDesc));
        assert_eq!(SortOrder::parse(Some("created_at")), None);
        assert_eq!(SortOrder::parse(None), None);
    }
}
