use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::services::{DisplayService, SensorProbe};

#[derive(Clone)]
pub struct LedState {
    pub probe: Arc<dyn SensorProbe>,
    pub display: Arc<DisplayService>,
}

pub async fn clear_led(State(state): State<LedState>) -> impl IntoResponse {
    state.display.clear().await;

    Json(json!({ "status": "LED display cleared" }))
}

pub async fn show_startup(State(state): State<LedState>) -> impl IntoResponse {
    state.display.show_startup().await;

    Json(json!({ "status": "Startup pattern displayed" }))
}

/// Refresh the matrix from a fresh poll without touching the history.
pub async fn update_led(State(state): State<LedState>) -> impl IntoResponse {
    let sample = state.probe.sample().await;

    state.display.render_sample(&sample).await;

    Json(json!({
        "status": "LED display updated",
        "temperature": sample.temperature,
        "humidity": sample.humidity,
        "pressure": sample.pressure,
    }))
}

/// Runs the full temperature sweep before answering (~2.1 s).
pub async fn show_demo(State(state): State<LedState>) -> impl IntoResponse {
    state.display.show_demo().await;

    Json(json!({ "status": "Temperature color demo displayed" }))
}

pub async fn show_text(State(state): State<LedState>) -> impl IntoResponse {
    let sample = state.probe.sample().await;

    state.display.show_text(&sample).await;

    Json(json!({
        "status": "Sensor values displayed as text",
        "temperature": sample.temperature,
        "humidity": sample.humidity,
        "pressure": sample.pressure,
    }))
}
