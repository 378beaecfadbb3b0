use serde::{Deserialize, Serialize};

use super::stay::{EntityType, Stay};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RejectionLogEntry {
    pub description: String,
    pub listing_id: Option<i64>,
    pub id: Option<i64>,
    pub entity_type: EntityType,
}

impl RejectionLogEntry {
    pub fn for_stay(stay: &Stay, entity_type: EntityType, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            listing_id: stay.listing_id,
            id: stay.id,
            entity_type,
        }
    }
}
