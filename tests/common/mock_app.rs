use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use time::OffsetDateTime;

use sensegrid::app::router;
use sensegrid::configs::schema::SchemaManager;
use sensegrid::configs::settings::Database;
use sensegrid::configs::storage::Storage;
use sensegrid::display::{Frame, MatrixSink, Rgb};
use sensegrid::errors::RenderError;
use sensegrid::models::Sample;
use sensegrid::services::{DisplayService, SensorProbe};

/// Probe that always answers with the same canned sample.
pub struct FixedProbe {
    pub sample: Sample,
}

#[async_trait]
impl SensorProbe for FixedProbe {
    async fn temperature(&self) -> Option<f64> {
        self.sample.temperature
    }

    async fn humidity(&self) -> Option<f64> {
        self.sample.humidity
    }

    async fn pressure(&self) -> Option<f64> {
        self.sample.pressure
    }
}

#[derive(Default)]
pub struct SinkLog {
    pub frames: Vec<Frame>,
    pub clears: usize,
    pub scrolls: Vec<(String, f64, Rgb)>,
    pub fail_next_set: bool,
}

/// Shared handle into a [`RecordingSink`], kept by the test for assertions.
#[derive(Clone, Default)]
pub struct SinkHandle(Arc<Mutex<SinkLog>>);

impl SinkHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> std::sync::MutexGuard<'_, SinkLog> {
        self.0.lock().unwrap()
    }

    pub fn fail_next_set(&self) {
        self.log().fail_next_set = true;
    }
}

/// Matrix sink that records every call, with an injectable fault.
pub struct RecordingSink {
    handle: SinkHandle,
}

impl RecordingSink {
    pub fn new(handle: SinkHandle) -> Self {
        Self { handle }
    }
}

impl MatrixSink for RecordingSink {
    fn set_pixels(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let mut log = self.handle.log();

        if log.fail_next_set {
            log.fail_next_set = false;
            return Err(RenderError::Sink(String::from("injected fault")));
        }

        log.frames.push(frame.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.handle.log().clears += 1;
        Ok(())
    }

    fn scroll_text(&mut self, message: &str, speed: f64, color: Rgb) -> Result<(), RenderError> {
        self.handle
            .log()
            .scrolls
            .push((message.to_string(), speed, color));
        Ok(())
    }
}

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub display: Arc<DisplayService>,
    pub sink: SinkHandle,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        Self::with_sample(Sample {
            temperature: Some(21.5),
            humidity: Some(48.0),
            pressure: Some(1003.0),
        })
        .await
    }

    pub async fn with_sample(sample: Sample) -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    url: String::from("sqlite::memory:"),
                    clean_start: true,
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let sink = SinkHandle::new();
        let display = Arc::new(DisplayService::new(
            Box::new(RecordingSink::new(sink.clone())),
            0.1,
        ));

        let router = router(
            storage.clone(),
            Arc::new(FixedProbe { sample }),
            display.clone(),
        );

        Self {
            storage,
            display,
            sink,
            router,
        }
    }

    pub async fn insert_reading(&self, ts: OffsetDateTime, sample: &Sample) {
        sqlx::query(
            "INSERT OR REPLACE INTO readings (ts, temperature, humidity, pressure) VALUES (?, ?, ?, ?)",
        )
        .bind(ts)
        .bind(sample.temperature)
        .bind(sample.humidity)
        .bind(sample.pressure)
        .execute(self.storage.get_pool())
        .await
        .unwrap();
    }
}
