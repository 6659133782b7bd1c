//! The LED rendering pipeline: color mapping, frame compositing, canned
//! sequences, and the sink seam in front of the hardware.

pub mod color;
pub mod frame;
pub mod sequence;
pub mod sink;

pub use color::{pressure_color, temperature_color, Rgb};
pub use frame::{compose, Frame, CORNERS, CROSS, GRID_CELLS};
pub use sequence::{demo_frames, sample_banner, startup_frame, PALETTE, SPIRAL_ORDER};
pub use sink::{MatrixSink, SimulatedMatrix};
