use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::db::models::TrackedColumn;

pub const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Mean of each tracked column over one non-empty time bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResampledBucket {
    #[serde(rename = "timestamp", serialize_with = "serialize_label")]
    pub bucket_start: NaiveDateTime,
    pub sample_count: usize,
    pub blink_rate: f64,
    pub fatigue: f64,
    pub red_ratio: f64,
    pub yellow_ratio: f64,
    pub blue_ratio: f64,
    pub brightness_ratio: f64,
}

impl ResampledBucket {
    pub fn label(&self) -> String {
        self.bucket_start.format(LABEL_FORMAT).to_string()
    }

    pub fn value(&self, column: TrackedColumn) -> f64 {
        match column {
            TrackedColumn::BlinkRate => self.blink_rate,
            TrackedColumn::Fatigue => self.fatigue,
            TrackedColumn::RedRatio => self.red_ratio,
            TrackedColumn::YellowRatio => self.yellow_ratio,
            TrackedColumn::BlueRatio => self.blue_ratio,
            TrackedColumn::BrightnessRatio => self.brightness_ratio,
        }
    }
}

fn serialize_label<S: Serializer>(start: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&start.format(LABEL_FORMAT))
}
