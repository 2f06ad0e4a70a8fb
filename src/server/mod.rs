//! HTTP shell: serves the page and the JSON it renders from.

pub mod error;
pub mod handlers;
pub mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use log::info;

use crate::cache::SampleCache;
use crate::db::Database;
use crate::resample::Granularity;
use crate::settings::Settings;

pub struct AppState {
    pub cache: SampleCache<Database>,
    pub default_granularity: Granularity,
    pub dark_mode: bool,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            cache: SampleCache::new(Database::new(settings.database_path.clone())),
            default_granularity: settings.default_granularity,
            dark_mode: settings.dark_mode,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/api/granularities", get(handlers::granularities_handler))
        .route("/api/dashboard", get(handlers::dashboard_handler))
        .route("/api/cache/clear", post(handlers::clear_cache_handler))
        .with_state(state)
}

pub async fn serve(settings: &Settings, addr: SocketAddr) -> Result<()> {
    let state = Arc::new(AppState::from_settings(settings));
    info!(
        "Serving eye-health dashboard for {} at http://{addr}",
        state.cache.source().path().display()
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router(state))
        .await
        .context("dashboard server stopped unexpectedly")?;

    Ok(())
}
