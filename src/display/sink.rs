use crate::display::color::Rgb;
use crate::display::frame::Frame;
use crate::errors::RenderError;

/// Seam in front of the physical LED matrix.
///
/// The real Sense HAT driver, a simulator, or a test double all sit behind
/// this trait; callers never touch a device handle directly. Implementations
/// are driven under a single lock (see `DisplayService`), so `&mut self` is
/// enough.
pub trait MatrixSink: Send {
    /// Push a full frame to the hardware.
    fn set_pixels(&mut self, frame: &Frame) -> Result<(), RenderError>;

    /// Blank every cell.
    fn clear(&mut self) -> Result<(), RenderError>;

    /// Scroll a message across the matrix at `speed` seconds per column.
    fn scroll_text(&mut self, message: &str, speed: f64, color: Rgb) -> Result<(), RenderError>;
}

/// In-memory stand-in for the matrix, used when no board is attached.
/// Keeps the last frame so the state stays inspectable.
#[derive(Default)]
pub struct SimulatedMatrix {
    frame: Frame,
}

impl SimulatedMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl MatrixSink for SimulatedMatrix {
    fn set_pixels(&mut self, frame: &Frame) -> Result<(), RenderError> {
        self.frame = frame.clone();
        tracing::debug!("simulated matrix frame updated");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.frame = Frame::default();
        tracing::debug!("simulated matrix cleared");
        Ok(())
    }

    fn scroll_text(&mut self, message: &str, speed: f64, color: Rgb) -> Result<(), RenderError> {
        tracing::debug!(message, speed, ?color, "simulated matrix scrolling text");
        Ok(())
    }
}
