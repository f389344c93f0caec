//! Card endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /add-card, POST /api/cards
pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<AddCardRequest>,
) -> Result<Json<AddCardResponse>> {
    let card = state.store.add_card(payload).await?;
    Ok(Json(AddCardResponse { status: "ok", card }))
}

/// GET /api/cards/{id}/hint
pub async fn hint(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<HintResponse>> {
    let hint = state.store.hint(card_id).await?;
    Ok(Json(HintResponse { card_id, hint }))
}
