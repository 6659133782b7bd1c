use std::f64::consts::{FRAC_PI_2, TAU};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::models::Sample;

/// Seam in front of the environmental sensor board. Each reading fails
/// independently; a `None` means that sensor did not answer.
#[async_trait]
pub trait SensorProbe: Send + Sync {
    async fn temperature(&self) -> Option<f64>;

    async fn humidity(&self) -> Option<f64>;

    async fn pressure(&self) -> Option<f64>;

    /// One poll of all three sensors.
    async fn sample(&self) -> Sample {
        Sample {
            temperature: self.temperature().await,
            humidity: self.humidity().await,
            pressure: self.pressure().await,
        }
    }
}

/// Probe backed by smooth day-cycle curves instead of hardware: coolest
/// before dawn and warmest mid-afternoon, humidity moving against the
/// temperature, pressure drifting gently around the standard atmosphere.
pub struct SimulatedProbe;

impl SimulatedProbe {
    pub fn new() -> Self {
        Self
    }

    fn day_fraction() -> f64 {
        let now = OffsetDateTime::now_utc().time();
        let seconds =
            now.hour() as u32 * 3600 + now.minute() as u32 * 60 + now.second() as u32;

        seconds as f64 / 86_400.0
    }
}

impl Default for SimulatedProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SensorProbe for SimulatedProbe {
    async fn temperature(&self) -> Option<f64> {
        let radians = Self::day_fraction() * TAU;

        Some(18.0 + (radians - FRAC_PI_2).sin() * 7.0)
    }

    async fn humidity(&self) -> Option<f64> {
        let radians = Self::day_fraction() * TAU;

        Some(60.0 - (radians - FRAC_PI_2).sin() * 20.0)
    }

    async fn pressure(&self) -> Option<f64> {
        let radians = Self::day_fraction() * TAU;

        Some(1013.0 + radians.cos() * 8.0)
    }
}
