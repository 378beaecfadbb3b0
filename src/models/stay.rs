use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dated stay on a listing, as supplied by the caller.
///
/// Bookings and reservations share this shape. Every field is optional and
/// dates are kept as raw JSON, so a record with a missing or non-string date
/// still deserializes and is rejected by the date parser instead of failing
/// the whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Stay {
    pub id: Option<i64>,
    pub listing_id: Option<i64>,
    pub start_date: Option<Value>,
    pub end_date: Option<Value>,
}

pub type Booking = Stay;
pub type Reservation = Stay;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Booking,
    Reservation,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Booking => "booking",
            EntityType::Reservation => "reservation",
        }
    }
}

impl Stay {
    pub fn new(id: i64, listing_id: i64, start_date: &str, end_date: &str) -> Self {
        Self {
            id: Some(id),
            listing_id: Some(listing_id),
            start_date: Some(Value::from(start_date)),
            end_date: Some(Value::from(end_date)),
        }
    }

    pub fn belongs_to(&self, listing_id: i64) -> bool {
        self.listing_id == Some(listing_id)
    }
}
