use thiserror::Error;

/// Failure modes of a dashboard render.
///
/// `EmptyInput` is informational: the store answered but there is nothing to
/// show. Every other variant blocks the render.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("eye-health data unavailable: {context}")]
    DataUnavailable {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("row {row} has an unparseable timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("no eye-health data to display")]
    EmptyInput,

    #[error("unsupported granularity '{0}'")]
    InvalidGranularity(String),
}

impl DashboardError {
    pub(crate) fn unavailable(context: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::DataUnavailable {
            context: context.into(),
            source,
        }
    }

    /// True when the render should stop with a "no data" notice instead of an error.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
