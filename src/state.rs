use std::sync::Mutex;

use crate::config::AppConfig;
use crate::models::RejectionLogEntry;
use crate::services::generator::MissionGenerator;

pub struct AppState {
    pub generator: MissionGenerator,
    /// Rejections of the most recent generation, replaced on every call.
    pub last_rejections: Mutex<Vec<RejectionLogEntry>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            generator: MissionGenerator::new(config.prices),
            last_rejections: Mutex::new(Vec::new()),
        }
    }
}
