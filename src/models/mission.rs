use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    FirstCheckin,
    LastCheckout,
    CheckoutCheckin,
}

impl MissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionType::FirstCheckin => "first_checkin",
            MissionType::LastCheckout => "last_checkout",
            MissionType::CheckoutCheckin => "checkout_checkin",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mission {
    pub listing_id: i64,
    pub mission_type: MissionType,
    /// Date text exactly as it appeared on the booking or reservation.
    pub date: String,
    pub price: i64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MissionsOutput {
    pub missions: Vec<Mission>,
}
