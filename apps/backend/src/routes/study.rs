//! Study endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/study/practice?day=N
pub async fn practice(
    State(state): State<AppState>,
    Query(query): Query<PracticeQuery>,
) -> Result<Json<PracticeResponse>> {
    let cards = state.store.practice(query.day).await?;
    Ok(Json(PracticeResponse {
        day: query.day,
        cards,
    }))
}

/// POST /api/study/review
pub async fn review(
    State(state): State<AppState>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>> {
    let (card, transition) = state.store.review(payload).await?;
    Ok(Json(ReviewResponse::new(card.id(), transition)))
}
