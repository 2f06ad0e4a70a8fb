//! Raw eye-health sample as stored in the `eye_health` table.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One recorded measurement row. Any measurement may be missing (SQL NULL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp: NaiveDateTime,
    pub blink_rate: Option<f64>,
    pub fatigue: Option<f64>,
    pub red_ratio: Option<f64>,
    pub yellow_ratio: Option<f64>,
    pub blue_ratio: Option<f64>,
    pub brightness_ratio: Option<f64>,
}

impl RawSample {
    /// Builds a sample with every measurement present, in `TrackedColumn::ALL` order.
    pub fn complete(timestamp: NaiveDateTime, values: [f64; 6]) -> Self {
        let [blink_rate, fatigue, red_ratio, yellow_ratio, blue_ratio, brightness_ratio] = values;
        Self {
            timestamp,
            blink_rate: Some(blink_rate),
            fatigue: Some(fatigue),
            red_ratio: Some(red_ratio),
            yellow_ratio: Some(yellow_ratio),
            blue_ratio: Some(blue_ratio),
            brightness_ratio: Some(brightness_ratio),
        }
    }
}
