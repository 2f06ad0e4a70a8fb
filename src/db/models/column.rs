use serde::{Deserialize, Serialize};

use super::RawSample;

/// The six measurement columns the dashboard tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedColumn {
    BlinkRate,
    Fatigue,
    RedRatio,
    YellowRatio,
    BlueRatio,
    BrightnessRatio,
}

impl TrackedColumn {
    pub const ALL: [TrackedColumn; 6] = [
        TrackedColumn::BlinkRate,
        TrackedColumn::Fatigue,
        TrackedColumn::RedRatio,
        TrackedColumn::YellowRatio,
        TrackedColumn::BlueRatio,
        TrackedColumn::BrightnessRatio,
    ];

    /// Column name in the `eye_health` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedColumn::BlinkRate => "blink_rate",
            TrackedColumn::Fatigue => "fatigue",
            TrackedColumn::RedRatio => "red_ratio",
            TrackedColumn::YellowRatio => "yellow_ratio",
            TrackedColumn::BlueRatio => "blue_ratio",
            TrackedColumn::BrightnessRatio => "brightness_ratio",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TrackedColumn::BlinkRate => "Blink Rate",
            TrackedColumn::Fatigue => "Fatigue",
            TrackedColumn::RedRatio => "Red Ratio",
            TrackedColumn::YellowRatio => "Yellow Ratio",
            TrackedColumn::BlueRatio => "Blue Ratio",
            TrackedColumn::BrightnessRatio => "Brightness Ratio",
        }
    }

    /// Bar color used for this column's chart.
    pub fn color(&self) -> &'static str {
        match self {
            TrackedColumn::BlinkRate => "#00BFFF",
            TrackedColumn::Fatigue => "#3399ff",
            TrackedColumn::RedRatio => "#ff4d6d",
            TrackedColumn::YellowRatio => "#ffc300",
            TrackedColumn::BlueRatio => "#228be6",
            TrackedColumn::BrightnessRatio => "#4dabf7",
        }
    }

    pub fn read(&self, sample: &RawSample) -> Option<f64> {
        match self {
            TrackedColumn::BlinkRate => sample.blink_rate,
            TrackedColumn::Fatigue => sample.fatigue,
            TrackedColumn::RedRatio => sample.red_ratio,
            TrackedColumn::YellowRatio => sample.yellow_ratio,
            TrackedColumn::BlueRatio => sample.blue_ratio,
            TrackedColumn::BrightnessRatio => sample.brightness_ratio,
        }
    }
}
