//! Headline averages for the metric cards.

use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::resample::ResampledBucket;

/// Smallest value a metric card will show. Applied to the card values only.
pub const MIN_DISPLAY_VALUE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean_blink: f64,
    pub mean_fatigue: f64,
    pub mean_brightness: f64,
}

impl Summary {
    /// Card text for blink, fatigue and brightness, three decimals each.
    pub fn formatted(&self) -> [String; 3] {
        [self.mean_blink, self.mean_fatigue, self.mean_brightness].map(|value| format!("{value:.3}"))
    }
}

fn mean_of(buckets: &[ResampledBucket], pick: impl Fn(&ResampledBucket) -> f64) -> f64 {
    buckets.iter().map(pick).sum::<f64>() / buckets.len() as f64
}

/// Averages bucket means with equal weight per bucket, then floors each
/// result at [`MIN_DISPLAY_VALUE`].
pub fn summarize(buckets: &[ResampledBucket]) -> Result<Summary> {
    if buckets.is_empty() {
        return Err(DashboardError::EmptyInput);
    }

    Ok(Summary {
        mean_blink: mean_of(buckets, |b| b.blink_rate).max(MIN_DISPLAY_VALUE),
        mean_fatigue: mean_of(buckets, |b| b.fatigue).max(MIN_DISPLAY_VALUE),
        mean_brightness: mean_of(buckets, |b| b.brightness_ratio).max(MIN_DISPLAY_VALUE),
    })
}
