use std::env;

use crate::models::PriceTable;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub input_path: Option<String>,
    pub prices: PriceTable,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = PriceTable::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            input_path: env::var("MISSIONS_INPUT").ok().filter(|v| !v.is_empty()),
            prices: PriceTable {
                first_checkin: price_var("PRICE_FIRST_CHECKIN", defaults.first_checkin),
                last_checkout: price_var("PRICE_LAST_CHECKOUT", defaults.last_checkout),
                checkout_checkin: price_var("PRICE_CHECKOUT_CHECKIN", defaults.checkout_checkin),
            },
        }
    }
}

fn price_var(name: &str, default: i64) -> i64 {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
