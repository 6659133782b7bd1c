use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use time::OffsetDateTime;

use crate::configs::storage::Storage;
use crate::errors::ApiError;
use crate::services::{DisplayService, SensorProbe};

#[derive(Clone)]
pub struct SensorState {
    pub probe: Arc<dyn SensorProbe>,
    pub storage: Arc<Storage>,
    pub display: Arc<DisplayService>,
}

/// Poll the board, append the sample to the history, refresh the matrix,
/// and return the readings.
pub async fn read_sensors(
    State(state): State<SensorState>,
) -> Result<impl IntoResponse, ApiError> {
    let sample = state.probe.sample().await;

    sqlx::query(
        "INSERT OR REPLACE INTO readings (ts, temperature, humidity, pressure) VALUES (?, ?, ?, ?)",
    )
    .bind(OffsetDateTime::now_utc())
    .bind(sample.temperature)
    .bind(sample.humidity)
    .bind(sample.pressure)
    .execute(state.storage.get_pool())
    .await?;

    state.display.render_sample(&sample).await;

    Ok(Json(sample))
}
