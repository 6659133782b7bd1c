use std::time::Duration;

use tokio::sync::Mutex;

use crate::display::color::Rgb;
use crate::display::frame::compose;
use crate::display::sequence::{demo_frames, sample_banner, startup_frame};
use crate::display::sink::MatrixSink;
use crate::errors::RenderError;
use crate::models::Sample;

/// Pause between demo sweep frames.
const DEMO_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Owns the matrix and serializes every write to it.
///
/// The matrix is one shared mutable device: a frame pushed halfway through
/// another render would be visible on the LEDs, so the sink sits behind a
/// mutex held for the whole of each operation. Rendering is best-effort:
/// a sink fault is logged and the display is forced to a cleared state, and
/// the call still returns normally.
pub struct DisplayService {
    sink: Mutex<Box<dyn MatrixSink>>,
    scroll_speed: f64,
}

impl DisplayService {
    pub fn new(sink: Box<dyn MatrixSink>, scroll_speed: f64) -> Self {
        Self {
            sink: Mutex::new(sink),
            scroll_speed,
        }
    }

    /// Composite one sample into a frame and push it to the matrix.
    pub async fn render_sample(&self, sample: &Sample) {
        let mut sink = self.sink.lock().await;
        let frame = compose(sample);

        if let Err(e) = sink.set_pixels(&frame) {
            Self::recover(sink.as_mut(), e);
        }
    }

    /// Blank the matrix.
    pub async fn clear(&self) {
        let mut sink = self.sink.lock().await;

        if let Err(e) = sink.clear() {
            tracing::error!("matrix clear failed: {e}");
        }
    }

    /// Show the rainbow spiral.
    pub async fn show_startup(&self) {
        let mut sink = self.sink.lock().await;

        if let Err(e) = sink.set_pixels(&startup_frame()) {
            Self::recover(sink.as_mut(), e);
        }
    }

    /// Sweep the temperature scale, one uniform fill per step. Holds the
    /// display lock for the full run (21 frames, ~2.1 s); once started the
    /// sweep cannot be interrupted.
    pub async fn show_demo(&self) {
        let mut sink = self.sink.lock().await;

        for frame in demo_frames() {
            if let Err(e) = sink.set_pixels(&frame) {
                Self::recover(sink.as_mut(), e);
                return;
            }

            tokio::time::sleep(DEMO_FRAME_DELAY).await;
        }
    }

    /// Scroll the sample readings across the matrix as white text.
    pub async fn show_text(&self, sample: &Sample) {
        let mut sink = self.sink.lock().await;
        let banner = sample_banner(sample);

        if let Err(e) = sink.scroll_text(&banner, self.scroll_speed, Rgb::WHITE) {
            Self::recover(sink.as_mut(), e);
        }
    }

    /// Single recovery point for sink faults: log, then leave the matrix
    /// cleared rather than showing a stale or partial frame.
    fn recover(sink: &mut dyn MatrixSink, err: RenderError) {
        tracing::error!("matrix render failed: {err}");

        if let Err(e) = sink.clear() {
            tracing::error!("matrix clear after fault failed: {e}");
        }
    }
}
