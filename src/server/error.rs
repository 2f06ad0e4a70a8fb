//! HTTP error mapping for the dashboard API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info};
use serde::Serialize;
use std::error::Error as _;

use crate::error::DashboardError;

/// Error body returned by every failing API call.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    Dashboard(DashboardError),
    BadRequest(String),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Dashboard(DashboardError::EmptyInput) => StatusCode::NOT_FOUND,
            AppError::Dashboard(DashboardError::InvalidGranularity(_)) => StatusCode::BAD_REQUEST,
            AppError::Dashboard(
                DashboardError::DataUnavailable { .. } | DashboardError::InvalidTimestamp { .. },
            ) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Dashboard(DashboardError::EmptyInput) => "NO_DATA",
            AppError::Dashboard(DashboardError::InvalidGranularity(_)) => "INVALID_GRANULARITY",
            AppError::Dashboard(DashboardError::DataUnavailable { .. }) => "DATA_UNAVAILABLE",
            AppError::Dashboard(DashboardError::InvalidTimestamp { .. }) => "INVALID_TIMESTAMP",
            AppError::BadRequest(_) => "INVALID_QUERY",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Dashboard(err) => describe(err),
            AppError::BadRequest(msg) | AppError::Internal(msg) => msg.clone(),
        };

        if status.is_server_error() {
            error!("Dashboard render failed: {message}");
        } else {
            info!("Dashboard render stopped: {message}");
        }

        let body = ApiError {
            code: self.code(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Error message with its source chain appended.
fn describe(err: &DashboardError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        AppError::Dashboard(err)
    }
}
