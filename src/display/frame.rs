use crate::display::color::{pressure_color, temperature_color, Rgb};
use crate::models::Sample;

/// Cell count of the 8x8 matrix, addressed row-major (index = row * 8 + col).
pub const GRID_CELLS: usize = 64;

/// The four extreme corners of the grid.
pub const CORNERS: [usize; 4] = [0, 7, 56, 63];

/// Plus-shaped cluster centered on the grid: the 2x2 center block, the arm
/// rows above and below, and the left/right arm cells.
pub const CROSS: [usize; 14] = [
    27, 28, 35, 36, // center block
    19, 20, 21, // upper arm
    43, 44, 45, // lower arm
    26, 34, // left arm
    29, 37, // right arm
];

/// A full matrix frame. Always exactly [`GRID_CELLS`] pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame([Rgb; GRID_CELLS]);

impl Frame {
    pub fn filled(color: Rgb) -> Self {
        Self([color; GRID_CELLS])
    }

    pub fn get(&self, index: usize) -> Rgb {
        self.0[index]
    }

    pub fn set(&mut self, index: usize, color: Rgb) {
        self.0[index] = color;
    }

    pub fn pixels(&self) -> &[Rgb; GRID_CELLS] {
        &self.0
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::filled(Rgb::BLACK)
    }
}

/// Build the frame for one sensor sample.
///
/// Three layers in strict precedence, later layers overwriting earlier ones:
/// 1. flood-fill with the temperature color (dim blue fallback when absent),
/// 2. corner brightness scaled by humidity (skipped when absent),
/// 3. pressure color overwriting the central cross (skipped when absent).
pub fn compose(sample: &Sample) -> Frame {
    let mut frame = Frame::filled(temperature_color(sample.temperature));

    if let Some(humidity) = sample.humidity {
        // 0.5 at bone dry, 1.0 at saturation
        let multiplier = 0.5 + humidity.clamp(0.0, 100.0) / 100.0 * 0.5;

        for corner in CORNERS {
            frame.set(corner, frame.get(corner).scaled(multiplier));
        }
    }

    if let Some(pressure) = sample.pressure {
        let accent = pressure_color(pressure);

        for cell in CROSS {
            frame.set(cell, accent);
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_fills_grid_with_fallback() {
        let frame = compose(&Sample::default());

        for cell in 0..GRID_CELLS {
            assert_eq!(frame.get(cell), Rgb::NO_DATA);
        }
    }

    #[test]
    fn test_missing_humidity_leaves_corners_untouched() {
        let sample = Sample {
            temperature: Some(30.0),
            humidity: None,
            pressure: None,
        };
        let frame = compose(&sample);
        let background = temperature_color(Some(30.0));

        for corner in CORNERS {
            assert_eq!(frame.get(corner), background);
        }
    }

    #[test]
    fn test_missing_pressure_skips_cross_layer() {
        let sample = Sample {
            temperature: Some(10.0),
            humidity: Some(80.0),
            pressure: None,
        };
        let frame = compose(&sample);
        let background = temperature_color(Some(10.0));

        for cell in CROSS {
            assert_eq!(frame.get(cell), background);
        }
    }

    #[test]
    fn test_full_sample_layer_precedence() {
        let sample = Sample {
            temperature: Some(20.0),
            humidity: Some(50.0),
            pressure: Some(1000.0),
        };
        let frame = compose(&sample);
        let background = temperature_color(Some(20.0));

        // corners dimmed by 0.5 + 0.5 * 0.5
        for corner in CORNERS {
            assert_eq!(frame.get(corner), background.scaled(0.75));
        }

        // midpoint pressure overwrites the cross with black
        for cell in CROSS {
            assert_eq!(frame.get(cell), Rgb::BLACK);
        }

        // everything else keeps the plain background
        for cell in 0..GRID_CELLS {
            if !CORNERS.contains(&cell) && !CROSS.contains(&cell) {
                assert_eq!(frame.get(cell), background);
            }
        }
    }

    #[test]
    fn test_out_of_range_humidity_clamps() {
        let wet = Sample {
            temperature: Some(20.0),
            humidity: Some(250.0),
            pressure: None,
        };
        let frame = compose(&wet);
        let background = temperature_color(Some(20.0));

        // clamped to 100% => multiplier 1.0, corners unchanged
        for corner in CORNERS {
            assert_eq!(frame.get(corner), background);
        }
    }

    #[test]
    fn test_cross_and_corners_are_disjoint() {
        for corner in CORNERS {
            assert!(!CROSS.contains(&corner));
        }
    }
}
