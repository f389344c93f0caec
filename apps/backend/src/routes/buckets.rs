//! Bucket endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/buckets
pub async fn list(State(state): State<AppState>) -> Json<BucketsResponse> {
    Json(BucketsResponse {
        buckets: state.store.buckets().await,
    })
}

/// GET /api/buckets/{number}
pub async fn get(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> Result<Json<BucketResponse>> {
    let (bucket, cards) = state.store.bucket(number).await?;
    Ok(Json(BucketResponse { bucket, cards }))
}
