use crate::display::color::{temperature_color, Rgb};
use crate::display::frame::{Frame, GRID_CELLS};
use crate::models::Sample;

/// Visit order for the startup animation: the 2x2 center block first, then
/// spiraling outward until every cell has been covered.
pub const SPIRAL_ORDER: [usize; GRID_CELLS] = [
    28, 29, 36, 37, 35, 27, 20, 21, 22, 30, 38, 46, 45, 44, 43, 42, 34, 26, 18, 19, 11, 12, 13,
    14, 15, 23, 31, 39, 47, 55, 54, 53, 52, 51, 50, 49, 41, 33, 25, 17, 9, 10, 2, 3, 4, 5, 6, 7,
    16, 24, 32, 40, 48, 56, 57, 58, 59, 60, 61, 62, 63, 1, 0, 8,
];

/// Rainbow palette cycled along the spiral, eight cells per color.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(255, 0, 0),     // red
    Rgb::new(255, 127, 0),   // orange
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(0, 255, 0),     // green
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(75, 0, 130),    // indigo
    Rgb::new(148, 0, 211),   // violet
    Rgb::new(255, 255, 255), // white
];

/// Temperature step between demo frames, in °C.
const DEMO_STEP: usize = 2;

/// Top of the demo sweep, in °C.
const DEMO_MAX: usize = 40;

/// The rainbow spiral shown once at boot.
pub fn startup_frame() -> Frame {
    let mut frame = Frame::default();

    for (visit, &cell) in SPIRAL_ORDER.iter().enumerate() {
        frame.set(cell, PALETTE[visit % PALETTE.len()]);
    }

    frame
}

/// Uniform fills sweeping the temperature scale from 0 to 40 °C inclusive.
pub fn demo_frames() -> impl Iterator<Item = Frame> {
    (0..=DEMO_MAX)
        .step_by(DEMO_STEP)
        .map(|celsius| Frame::filled(temperature_color(Some(celsius as f64))))
}

/// One-line summary of a sample for the scrolling-text mode. Readings that
/// failed to come back are shown as `--` rather than a fake number.
pub fn sample_banner(sample: &Sample) -> String {
    format!(
        "T:{}C H:{}% P:{}hPa",
        fmt_reading(sample.temperature, 1),
        fmt_reading(sample.humidity, 1),
        fmt_reading(sample.pressure, 0),
    )
}

fn fmt_reading(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format!("{value:.decimals$}"),
        None => String::from("--"),
    }
}
