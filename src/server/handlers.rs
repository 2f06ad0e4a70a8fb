use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use crate::dashboard::{build_dashboard, DashboardView};
use crate::resample::Granularity;
use crate::server::{error::AppError, page::INDEX_HTML, AppState};

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Debug, Serialize)]
pub struct GranularityOption {
    pub label: &'static str,
    pub rule: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GranularitiesResponse {
    pub default: Granularity,
    pub dark_mode: bool,
    pub options: Vec<GranularityOption>,
}

pub async fn granularities_handler(State(state): State<Arc<AppState>>) -> Json<GranularitiesResponse> {
    let options = Granularity::ALL
        .iter()
        .map(|g| GranularityOption {
            label: g.label(),
            rule: g.rule(),
        })
        .collect();

    Json(GranularitiesResponse {
        default: state.default_granularity,
        dark_mode: state.dark_mode,
        options,
    })
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub granularity: Option<String>,
    pub dark: Option<String>,
}

fn parse_dark(raw: Option<&str>, default: bool) -> Result<bool, AppError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<bool>()
            .map_err(|_| AppError::BadRequest(format!("invalid dark flag '{raw}'"))),
        None => Ok(default),
    }
}

pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, AppError> {
    let granularity = match query.granularity.as_deref() {
        Some(raw) => raw.parse::<Granularity>()?,
        None => state.default_granularity,
    };
    let dark_mode = parse_dark(query.dark.as_deref(), state.dark_mode)?;

    let view = tokio::task::spawn_blocking(move || {
        let samples = state.cache.get()?;
        build_dashboard(&samples, granularity, dark_mode)
    })
    .await
    .map_err(|err| AppError::Internal(format!("render task failed: {err}")))??;

    Ok(Json(view))
}

pub async fn clear_cache_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.cache.invalidate();
    Json(serde_json::json!({ "cleared": true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_flag_defaults_when_absent() {
        assert!(parse_dark(None, true).unwrap());
        assert!(!parse_dark(Some("false"), true).unwrap());
        assert!(parse_dark(Some(" true "), false).unwrap());
    }

    #[test]
    fn malformed_dark_flag_is_a_bad_request() {
        let err = parse_dark(Some("maybe"), true).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("maybe")));
    }
}
