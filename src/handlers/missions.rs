use std::sync::{Arc, MutexGuard};

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{CleaningInput, MissionsOutput, PriceTable, RejectionLogEntry};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RejectionsResponse {
    pub rejections: Vec<RejectionLogEntry>,
}

// Recovers from poisoning; writers always replace the whole log.
fn lock_rejections(state: &AppState) -> MutexGuard<'_, Vec<RejectionLogEntry>> {
    state.last_rejections.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("rejection log lock was poisoned, recovering");
        poisoned.into_inner()
    })
}

pub async fn generate_missions(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<MissionsOutput>, AppError> {
    let input = CleaningInput::from_json(&body)?;
    let generation = state.generator.generate(&input);

    tracing::info!(
        listings = input.listings.len(),
        missions = generation.output.missions.len(),
        rejections = generation.rejections.len(),
        "missions generated"
    );

    *lock_rejections(&state) = generation.rejections;

    Ok(Json(generation.output))
}

pub async fn last_rejections(State(state): State<Arc<AppState>>) -> Json<RejectionsResponse> {
    let rejections = lock_rejections(&state).clone();
    Json(RejectionsResponse { rejections })
}

pub async fn get_prices(State(state): State<Arc<AppState>>) -> Json<PriceTable> {
    Json(*state.generator.prices())
}
