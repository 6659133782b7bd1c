use serde::{Deserialize, Serialize};

/// One LED cell, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Shown as background when the temperature reading is missing.
    pub const NO_DATA: Rgb = Rgb::new(0, 0, 50);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor`, truncating toward zero.
    pub fn scaled(self, factor: f64) -> Rgb {
        Rgb::new(
            (self.r as f64 * factor) as u8,
            (self.g as f64 * factor) as u8,
            (self.b as f64 * factor) as u8,
        )
    }
}

/// HSV to RGB with all components in [0, 1].
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = h * 6.0;
    let i = sector as i32;
    let f = sector - i as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, q, p),
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0) as u8
}

/// Background color for a temperature reading.
///
/// The useful range is 0-40 °C; anything outside is clamped. The hue runs
/// from blue (0.66) through green (0.33) down to red (0.0) as the reading
/// climbs, at fixed saturation 0.8 and value 0.5. A missing reading maps to
/// the dim blue [`Rgb::NO_DATA`] so "no sensor" never looks like a valid
/// temperature.
pub fn temperature_color(temperature: Option<f64>) -> Rgb {
    let Some(temperature) = temperature else {
        return Rgb::NO_DATA;
    };

    let norm = temperature.clamp(0.0, 40.0) / 40.0;

    let hue = if norm < 0.5 {
        0.66 - norm * 2.0 * 0.33
    } else {
        0.33 - (norm - 0.5) * 2.0 * 0.33
    };

    let (r, g, b) = hsv_to_rgb(hue, 0.8, 0.5);

    Rgb::new(channel(r), channel(g), channel(b))
}

/// Accent color for a pressure reading over the 950-1050 hPa band.
///
/// Below the midpoint the cross shows purple, fading out as pressure rises;
/// above it yellow, brightening toward 1050 hPa. Exactly at 1000 hPa both
/// branches bottom out at black, which is the intended crossover.
pub fn pressure_color(pressure: f64) -> Rgb {
    let norm = (pressure - 950.0).clamp(0.0, 100.0) / 100.0;

    if norm < 0.5 {
        let intensity = (0.5 - norm) * 2.0;
        Rgb::new((128.0 * intensity) as u8, 0, (255.0 * intensity) as u8)
    } else {
        let intensity = (norm - 0.5) * 2.0;
        let level = channel(intensity);
        Rgb::new(level, level, 0)
    }
}
