use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::display::SimulatedMatrix;
use crate::handles::*;
use crate::services::{DisplayService, SensorProbe, SimulatedProbe};

pub async fn create_app(settings: &Arc<Settings>) -> Router {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default())
            .await
            .unwrap(),
    );

    let probe: Arc<dyn SensorProbe> = Arc::new(SimulatedProbe::new());
    let display = Arc::new(DisplayService::new(
        Box::new(SimulatedMatrix::new()),
        settings.matrix.scroll_speed,
    ));

    if settings.matrix.startup_pattern {
        display.show_startup().await;
    }

    router(storage, probe, display)
}

pub fn router(
    storage: Arc<Storage>,
    probe: Arc<dyn SensorProbe>,
    display: Arc<DisplayService>,
) -> Router {
    let sensors = Router::new()
        .route("/", get(read_sensors))
        .with_state(SensorState {
            probe: probe.clone(),
            storage: storage.clone(),
            display: display.clone(),
        });

    let history = Router::new()
        .route("/", get(read_history))
        .with_state(HistoryState {
            storage: storage.clone(),
        });

    let led = Router::new()
        .route("/clear", get(clear_led))
        .route("/startup", get(show_startup))
        .route("/update", get(update_led))
        .route("/demo", get(show_demo))
        .route("/text", get(show_text))
        .with_state(LedState {
            probe: probe.clone(),
            display: display.clone(),
        });

    Router::new()
        .route("/", get(index))
        .nest("/sensors", sensors)
        .nest("/history", history)
        .nest("/led", led)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
