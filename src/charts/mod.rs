//! Bar-chart specifications for the trend section.
//!
//! Specs are plain data. The page script turns each one into a Plotly bar
//! trace plus layout, so field names follow Plotly's layout keys.

pub mod theme;

use serde::Serialize;

use crate::db::models::TrackedColumn;
use crate::resample::ResampledBucket;

pub use theme::Theme;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub tickangle: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font: Font,
    pub xaxis: XAxis,
    pub height: u32,
    pub margin: Margin,
    pub bargap: f64,
}

impl ChartLayout {
    pub fn themed(theme: &Theme) -> Self {
        Self {
            plot_bgcolor: theme.background,
            paper_bgcolor: theme.background,
            font: Font {
                color: theme.font_color,
            },
            xaxis: XAxis { tickangle: -45 },
            height: 400,
            margin: Margin {
                t: 40,
                b: 80,
                l: 40,
                r: 40,
            },
            bargap: 0.3,
        }
    }
}

/// One bar chart: bucket labels on x, one column's means on y.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub column: TrackedColumn,
    pub title: &'static str,
    pub color: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub layout: ChartLayout,
}

/// One spec per tracked column, in [`TrackedColumn::ALL`] order.
pub fn render(buckets: &[ResampledBucket], theme: &Theme) -> Vec<ChartSpec> {
    let labels: Vec<String> = buckets.iter().map(ResampledBucket::label).collect();

    TrackedColumn::ALL
        .iter()
        .map(|&column| ChartSpec {
            column,
            title: column.title(),
            color: column.color(),
            x: labels.clone(),
            y: buckets.iter().map(|bucket| bucket.value(column)).collect(),
            layout: ChartLayout::themed(theme),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn bucket(hour: u32, blink_rate: f64) -> ResampledBucket {
        ResampledBucket {
            bucket_start: NaiveDate::from_ymd_opt(2024, 2, 29)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            sample_count: 3,
            blink_rate,
            fatigue: 0.2,
            red_ratio: 0.31,
            yellow_ratio: 0.22,
            blue_ratio: 0.47,
            brightness_ratio: 0.9,
        }
    }

    #[test]
    fn six_distinct_charts_for_a_single_bucket() {
        let charts = render(&[bucket(4, 11.0)], &Theme::default());

        assert_eq!(charts.len(), 6);
        let columns: HashSet<_> = charts.iter().map(|c| c.column).collect();
        assert_eq!(columns.len(), 6);
        assert!(charts.iter().all(|c| c.x == vec!["2024-02-29 04:00".to_string()]));
    }

    #[test]
    fn six_charts_even_without_buckets() {
        let charts = render(&[], &Theme::default());
        assert_eq!(charts.len(), 6);
        assert!(charts.iter().all(|c| c.x.is_empty() && c.y.is_empty()));
    }

    #[test]
    fn values_follow_bucket_order() {
        let charts = render(&[bucket(1, 5.0), bucket(2, 8.0)], &Theme::default());

        let blink = &charts[0];
        assert_eq!(blink.column, TrackedColumn::BlinkRate);
        assert_eq!(blink.title, "Blink Rate");
        assert_eq!(blink.color, "#00BFFF");
        assert_eq!(blink.y, vec![5.0, 8.0]);

        let blue = charts
            .iter()
            .find(|c| c.column == TrackedColumn::BlueRatio)
            .unwrap();
        assert_eq!(blue.y, vec![0.47, 0.47]);
        assert_eq!(blue.color, "#228be6");
    }

    #[test]
    fn layout_tracks_theme_background() {
        let light = render(&[bucket(0, 1.0)], &Theme::for_mode(false));
        let dark = render(&[bucket(0, 1.0)], &Theme::for_mode(true));

        assert_eq!(light[0].layout.plot_bgcolor, "#f9fbfd");
        assert_eq!(dark[0].layout.paper_bgcolor, "#0e0e10");
        assert_eq!(light[0].y, dark[0].y);
        assert_eq!(dark[0].layout.xaxis.tickangle, -45);
    }
}
