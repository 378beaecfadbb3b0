use serde::{Deserialize, Serialize};

use super::mission::MissionType;
use crate::errors::AppError;

/// Per-room price of each mission type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceTable {
    pub first_checkin: i64,
    pub last_checkout: i64,
    pub checkout_checkin: i64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            first_checkin: 10,
            last_checkout: 5,
            checkout_checkin: 10,
        }
    }
}

impl PriceTable {
    pub fn unit_price(&self, mission_type: MissionType) -> i64 {
        match mission_type {
            MissionType::FirstCheckin => self.first_checkin,
            MissionType::LastCheckout => self.last_checkout,
            MissionType::CheckoutCheckin => self.checkout_checkin,
        }
    }

    pub fn price(&self, mission_type: MissionType, num_rooms: i64) -> i64 {
        self.unit_price(mission_type).saturating_mul(num_rooms)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for mission_type in [
            MissionType::FirstCheckin,
            MissionType::LastCheckout,
            MissionType::CheckoutCheckin,
        ] {
            let price = self.unit_price(mission_type);
            if price < 0 {
                return Err(AppError::Config(format!(
                    "price for {} must not be negative (got {price})",
                    mission_type.as_str()
                )));
            }
        }
        Ok(())
    }
}
