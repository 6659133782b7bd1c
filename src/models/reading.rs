use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::Table;

/// One poll of the sensor board. Each reading fails independently, so every
/// field is optional; a `None` means that sensor did not answer this time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

/// A persisted sample, as stored in and read back from the history table.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reading {
    #[serde(with = "time::serde::rfc3339")]
    pub ts: OffsetDateTime,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

pub struct ReadingTable;

impl Table for ReadingTable {
    fn name(&self) -> &'static str {
        "readings"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS readings (
                ts TEXT PRIMARY KEY,
                temperature REAL,
                humidity REAL,
                pressure REAL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS readings;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
