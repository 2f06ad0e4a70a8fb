pub mod cache;
pub mod charts;
pub mod cli;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod resample;
pub mod server;
pub mod settings;
pub mod summary;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use cli::{Cli, Command};
use dashboard::build_dashboard;
use db::Database;
use resample::Granularity;
use settings::Settings;

pub use cache::SampleCache;
pub use dashboard::DashboardView;

fn export(settings: &Settings, granularity: Option<&str>, light: bool, pretty: bool) -> Result<()> {
    let granularity = match granularity {
        Some(raw) => raw.parse::<Granularity>()?,
        None => settings.default_granularity,
    };
    let dark_mode = settings.dark_mode && !light;

    let samples = Database::new(settings.database_path.clone()).load_samples()?;
    let view = match build_dashboard(&samples, granularity, dark_mode) {
        Ok(view) => view,
        Err(err) if err.is_no_data() => {
            warn!("No data available in {}", settings.database_path.display());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&view)
    } else {
        serde_json::to_string(&view)
    }
    .context("failed to serialize dashboard")?;
    println!("{json}");
    Ok(())
}

pub fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let settings = cli.apply(Settings::load(&cli.config)?);

    match &cli.command {
        Some(Command::Export {
            granularity,
            light,
            pretty,
        }) => export(&settings, granularity.as_deref(), *light, *pretty),
        Some(Command::Serve { .. }) | None => {
            info!("Eye dashboard starting up...");
            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            runtime.block_on(server::serve(&settings, settings.bind_address))
        }
    }
}
