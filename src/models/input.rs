use serde::Deserialize;

use super::listing::Listing;
use super::stay::{Booking, Reservation};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CleaningInput {
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl CleaningInput {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "listings": [{"id": 1, "num_rooms": 2}],
            "bookings": [{"id": 1, "listing_id": 1, "start_date": "2016-10-10", "end_date": "2016-10-15"}],
            "reservations": []
        }"#;
        let input = CleaningInput::from_json(json).unwrap();
        assert_eq!(input.listings, vec![Listing { id: 1, num_rooms: 2 }]);
        assert_eq!(input.bookings.len(), 1);
        assert_eq!(
            input.bookings[0].start_date.as_ref().and_then(|v| v.as_str()),
            Some("2016-10-10")
        );
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let input = CleaningInput::from_json(r#"{"listings":[{"id":1,"num_rooms":1}]}"#).unwrap();
        assert!(input.bookings.is_empty());
        assert!(input.reservations.is_empty());
    }

    #[test]
    fn test_wrongly_typed_date_does_not_fail_document() {
        let json = r#"{
            "listings": [{"id": 1, "num_rooms": 1}],
            "bookings": [
                {"id": 1, "listing_id": 1, "start_date": "2016-10-10", "end_date": "2016-10-15"},
                {"id": 2, "listing_id": 1, "start_date": 20161016, "end_date": "2016-10-20"}
            ]
        }"#;
        let input = CleaningInput::from_json(json).unwrap();
        assert_eq!(input.bookings.len(), 2);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(CleaningInput::from_json("not json").is_err());
    }
}
