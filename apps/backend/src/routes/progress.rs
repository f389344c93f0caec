//! Progress endpoint

use axum::{extract::State, Json};

use crate::models::ProgressStats;
use crate::AppState;

/// GET /api/progress
pub async fn get(State(state): State<AppState>) -> Json<ProgressStats> {
    Json(state.store.progress().await)
}
