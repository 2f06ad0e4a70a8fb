use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Supported resampling widths. Every width divides a day evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    #[default]
    #[serde(rename = "1 min", alias = "1min")]
    OneMinute,
    #[serde(rename = "5 min", alias = "5min")]
    FiveMinutes,
    #[serde(rename = "30 min", alias = "30min")]
    ThirtyMinutes,
    #[serde(rename = "1 hour", alias = "1H")]
    OneHour,
    #[serde(rename = "12 hours", alias = "12H")]
    TwelveHours,
    #[serde(rename = "1 day", alias = "1D")]
    OneDay,
}

impl Granularity {
    /// Display order for the granularity selector.
    pub const ALL: [Granularity; 6] = [
        Granularity::OneMinute,
        Granularity::FiveMinutes,
        Granularity::ThirtyMinutes,
        Granularity::OneHour,
        Granularity::TwelveHours,
        Granularity::OneDay,
    ];

    pub fn width_secs(&self) -> i64 {
        match self {
            Granularity::OneMinute => 60,
            Granularity::FiveMinutes => 5 * 60,
            Granularity::ThirtyMinutes => 30 * 60,
            Granularity::OneHour => 60 * 60,
            Granularity::TwelveHours => 12 * 60 * 60,
            Granularity::OneDay => 24 * 60 * 60,
        }
    }

    pub fn width(&self) -> Duration {
        Duration::seconds(self.width_secs())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::OneMinute => "1 min",
            Granularity::FiveMinutes => "5 min",
            Granularity::ThirtyMinutes => "30 min",
            Granularity::OneHour => "1 hour",
            Granularity::TwelveHours => "12 hours",
            Granularity::OneDay => "1 day",
        }
    }

    /// Frequency-rule spelling (`1min`, `1H`, `1D`, ...).
    pub fn rule(&self) -> &'static str {
        match self {
            Granularity::OneMinute => "1min",
            Granularity::FiveMinutes => "5min",
            Granularity::ThirtyMinutes => "30min",
            Granularity::OneHour => "1H",
            Granularity::TwelveHours => "12H",
            Granularity::OneDay => "1D",
        }
    }

    pub fn from_width(width: Duration) -> Result<Self, DashboardError> {
        Self::ALL
            .into_iter()
            .find(|granularity| granularity.width() == width)
            .ok_or_else(|| DashboardError::InvalidGranularity(format!("{}s", width.num_seconds())))
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Granularity {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|granularity| {
                granularity.label().eq_ignore_ascii_case(wanted)
                    || granularity.rule().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DashboardError::InvalidGranularity(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_rules() {
        assert_eq!("1 min".parse::<Granularity>().unwrap(), Granularity::OneMinute);
        assert_eq!("12h".parse::<Granularity>().unwrap(), Granularity::TwelveHours);
        assert_eq!(" 1 DAY ".parse::<Granularity>().unwrap(), Granularity::OneDay);
        assert_eq!("30min".parse::<Granularity>().unwrap(), Granularity::ThirtyMinutes);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "2 min".parse::<Granularity>().unwrap_err();
        assert!(matches!(err, DashboardError::InvalidGranularity(ref v) if v == "2 min"));
    }

    #[test]
    fn width_round_trips_for_every_granularity() {
        for granularity in Granularity::ALL {
            assert_eq!(Granularity::from_width(granularity.width()).unwrap(), granularity);
        }
    }

    #[test]
    fn unsupported_width_is_rejected() {
        assert!(matches!(
            Granularity::from_width(Duration::minutes(2)),
            Err(DashboardError::InvalidGranularity(_))
        ));
        assert!(Granularity::from_width(Duration::zero()).is_err());
    }

    #[test]
    fn every_width_divides_a_day() {
        for granularity in Granularity::ALL {
            assert_eq!(86_400 % granularity.width_secs(), 0, "{granularity}");
        }
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Granularity::OneHour).unwrap();
        assert_eq!(json, "\"1 hour\"");
        let parsed: Granularity = serde_json::from_str("\"5min\"").unwrap();
        assert_eq!(parsed, Granularity::FiveMinutes);
    }
}
