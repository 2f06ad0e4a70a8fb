use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use crate::resample::Granularity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database_path: PathBuf,
    pub bind_address: SocketAddr,
    pub default_granularity: Granularity,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("eye_data.db"),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8501)),
            default_granularity: Granularity::default(),
            dark_mode: true,
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file gives defaults; an
    /// unreadable or malformed one is logged and also gives defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = match fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))
        {
            Ok(contents) => contents,
            Err(err) => {
                warn!("{err:#}; using defaults");
                return Ok(Self::default());
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(
                    "Ignoring malformed settings in {}: {err}; using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }
}
