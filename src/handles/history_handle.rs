use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::configs::storage::Storage;
use crate::errors::ApiError;
use crate::models::Reading;

#[derive(Serialize, Deserialize, Clone)]
pub struct HistoryQuery {
    limit: Option<i64>,
}

#[derive(Clone)]
pub struct HistoryState {
    pub storage: Arc<Storage>,
}

/// Return the most recent readings, oldest first.
pub async fn read_history(
    Query(query): Query<HistoryQuery>,
    State(state): State<HistoryState>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = query.limit.unwrap_or(50);

    let mut readings = sqlx::query_as::<_, Reading>(
        "SELECT ts, temperature, humidity, pressure FROM readings ORDER BY ts DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(state.storage.get_pool())
    .await?;

    readings.reverse();

    Ok(Json(readings))
}
