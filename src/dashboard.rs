//! One full render pass: raw samples in, complete dashboard view out.

use log::debug;
use serde::Serialize;

use crate::charts::{self, ChartSpec, Theme};
use crate::db::models::RawSample;
use crate::error::{DashboardError, Result};
use crate::resample::{resample_by, Granularity, ResampledBucket};
use crate::summary::{summarize, Summary};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

/// Everything the page needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub granularity: Granularity,
    pub theme: Theme,
    pub summary: Summary,
    pub cards: Vec<MetricCard>,
    pub charts: Vec<ChartSpec>,
    pub table: Vec<ResampledBucket>,
}

const CARD_LABELS: [&str; 3] = ["Average Blink Rate", "Average Fatigue", "Average Brightness"];

/// Fails with [`DashboardError::EmptyInput`] when there are no samples or no
/// bucket survives resampling; never returns a partial view.
pub fn build_dashboard(
    samples: &[RawSample],
    granularity: Granularity,
    dark_mode: bool,
) -> Result<DashboardView> {
    if samples.is_empty() {
        return Err(DashboardError::EmptyInput);
    }

    let table = resample_by(samples, granularity);
    debug!(
        "Resampled {} samples into {} buckets at {}",
        samples.len(),
        table.len(),
        granularity
    );
    if table.is_empty() {
        return Err(DashboardError::EmptyInput);
    }

    let summary = summarize(&table)?;
    let theme = Theme::for_mode(dark_mode);
    let charts = charts::render(&table, &theme);
    let cards = CARD_LABELS
        .into_iter()
        .zip(summary.formatted())
        .map(|(label, value)| MetricCard { label, value })
        .collect();

    Ok(DashboardView {
        granularity,
        theme,
        summary,
        cards,
        charts,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(minute: u32, second: u32, blink_rate: f64) -> RawSample {
        let ts = NaiveDate::from_ymd_opt(2024, 4, 2)
            .unwrap()
            .and_hms_opt(0, minute, second)
            .unwrap();
        RawSample::complete(ts, [blink_rate, 0.4, 0.3, 0.2, 0.5, 0.8])
    }

    #[test]
    fn no_samples_means_no_data() {
        let err = build_dashboard(&[], Granularity::OneMinute, true).unwrap_err();
        assert!(err.is_no_data());
    }

    #[test]
    fn all_null_rows_mean_no_data() {
        let mut row = sample(0, 0, 1.0);
        row.fatigue = None;

        let err = build_dashboard(&[row], Granularity::OneMinute, true).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyInput));
    }

    #[test]
    fn builds_every_section() {
        let samples = vec![sample(0, 30, 5.0), sample(1, 10, 7.0), sample(1, 45, 9.0)];

        let view = build_dashboard(&samples, Granularity::OneMinute, false).unwrap();

        assert_eq!(view.table.len(), 2);
        assert_eq!(view.charts.len(), 6);
        assert_eq!(view.summary.mean_blink, 6.5);
        assert_eq!(view.cards[0].label, "Average Blink Rate");
        assert_eq!(view.cards[0].value, "6.500");
        assert_eq!(view.cards[2].value, "0.800");
        assert!(!view.theme.dark);
    }

    #[test]
    fn view_serializes_bucket_labels() {
        let view = build_dashboard(&[sample(5, 0, 3.0)], Granularity::FiveMinutes, true).unwrap();

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["granularity"], "5 min");
        assert_eq!(json["table"][0]["timestamp"], "2024-04-02 00:05");
        assert_eq!(json["charts"][0]["x"][0], "2024-04-02 00:05");
        assert_eq!(json["charts"][1]["column"], "fatigue");
    }
}
