use log::info;
use rusqlite::Row;

use crate::db::{
    connection::Database,
    helpers::parse_timestamp,
    models::{RawSample, TrackedColumn},
    SampleSource,
};
use crate::error::{DashboardError, Result};

const EYE_HEALTH_TABLE: &str = "eye_health";

fn read_measurement(row: &Row<'_>, column: TrackedColumn) -> rusqlite::Result<Option<f64>> {
    row.get::<_, Option<f64>>(column.as_str())
}

impl Database {
    /// Loads every recorded sample, oldest first.
    ///
    /// An existing but empty table yields an empty vector, not an error.
    pub fn load_samples(&self) -> Result<Vec<RawSample>> {
        let samples = self.execute(|conn| {
            let query = format!("SELECT * FROM {EYE_HEALTH_TABLE} ORDER BY timestamp ASC");
            let mut stmt = conn
                .prepare(&query)
                .map_err(|err| DashboardError::unavailable("failed to prepare sample query", err))?;
            let mut rows = stmt
                .query([])
                .map_err(|err| DashboardError::unavailable("failed to query samples", err))?;

            let mut samples = Vec::new();
            while let Some(row) = rows
                .next()
                .map_err(|err| DashboardError::unavailable("failed to step sample rows", err))?
            {
                let index = samples.len();
                samples.push(decode_row(row, index)?);
            }

            Ok(samples)
        })?;

        info!(
            "Loaded {} eye-health samples from {}",
            samples.len(),
            self.path().display()
        );
        Ok(samples)
    }
}

fn decode_row(row: &Row<'_>, index: usize) -> Result<RawSample> {
    let decode_err =
        |err: rusqlite::Error| DashboardError::unavailable(format!("failed to decode sample row {index}"), err);

    let raw_timestamp: String = row.get("timestamp").map_err(decode_err)?;
    let timestamp =
        parse_timestamp(&raw_timestamp).ok_or_else(|| DashboardError::InvalidTimestamp {
            row: index,
            value: raw_timestamp.clone(),
        })?;

    Ok(RawSample {
        timestamp,
        blink_rate: read_measurement(row, TrackedColumn::BlinkRate).map_err(decode_err)?,
        fatigue: read_measurement(row, TrackedColumn::Fatigue).map_err(decode_err)?,
        red_ratio: read_measurement(row, TrackedColumn::RedRatio).map_err(decode_err)?,
        yellow_ratio: read_measurement(row, TrackedColumn::YellowRatio).map_err(decode_err)?,
        blue_ratio: read_measurement(row, TrackedColumn::BlueRatio).map_err(decode_err)?,
        brightness_ratio: read_measurement(row, TrackedColumn::BrightnessRatio)
            .map_err(decode_err)?,
    })
}

impl SampleSource for Database {
    fn load(&self) -> Result<Vec<RawSample>> {
        self.load_samples()
    }
}
