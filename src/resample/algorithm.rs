use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDateTime};

use crate::db::models::{RawSample, TrackedColumn};
use crate::error::Result;
use crate::resample::{bucket::ResampledBucket, granularity::Granularity};

/// Running sums for one bucket, one slot per tracked column.
#[derive(Debug, Default)]
struct BucketAccumulator {
    sums: [f64; 6],
    counts: [usize; 6],
    samples: usize,
}

impl BucketAccumulator {
    fn add(&mut self, sample: &RawSample) {
        self.samples += 1;
        for (slot, column) in TrackedColumn::ALL.iter().enumerate() {
            if let Some(value) = column.read(sample) {
                self.sums[slot] += value;
                self.counts[slot] += 1;
            }
        }
    }

    /// Per-column means, or `None` when any column saw no value at all.
    fn means(&self) -> Option<[f64; 6]> {
        let mut means = [0.0; 6];
        for ((mean, sum), count) in means.iter_mut().zip(self.sums).zip(self.counts) {
            if count == 0 {
                return None;
            }
            *mean = sum / count as f64;
        }
        Some(means)
    }

    fn finish(self, bucket_start: NaiveDateTime) -> Option<ResampledBucket> {
        let [blink_rate, fatigue, red_ratio, yellow_ratio, blue_ratio, brightness_ratio] =
            self.means()?;
        Some(ResampledBucket {
            bucket_start,
            sample_count: self.samples,
            blink_rate,
            fatigue,
            red_ratio,
            yellow_ratio,
            blue_ratio,
            brightness_ratio,
        })
    }
}

/// Left edge, in Unix seconds, of the epoch-aligned bucket holding `timestamp`.
fn bucket_key(timestamp: NaiveDateTime, width_secs: i64) -> i64 {
    timestamp
        .and_utc()
        .timestamp()
        .div_euclid(width_secs)
        * width_secs
}

/// Averages `samples` into fixed-width buckets of `width`.
///
/// `width` must be one of the supported granularities.
pub fn resample(samples: &[RawSample], width: Duration) -> Result<Vec<ResampledBucket>> {
    let granularity = Granularity::from_width(width)?;
    Ok(resample_by(samples, granularity))
}

/// Buckets are `[start, start + width)` on a grid anchored at the Unix epoch.
/// Empty buckets, and buckets where some column has no values, are omitted.
/// Output is ascending by bucket start whatever the input order.
pub fn resample_by(samples: &[RawSample], granularity: Granularity) -> Vec<ResampledBucket> {
    let width_secs = granularity.width_secs();
    let mut buckets: BTreeMap<i64, BucketAccumulator> = BTreeMap::new();

    for sample in samples {
        buckets
            .entry(bucket_key(sample.timestamp, width_secs))
            .or_default()
            .add(sample);
    }

    buckets
        .into_iter()
        .filter_map(|(key, accumulator)| {
            let bucket_start = DateTime::from_timestamp(key, 0)?.naive_utc();
            accumulator.finish(bucket_start)
        })
        .collect()
}
