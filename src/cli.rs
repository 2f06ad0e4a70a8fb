use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "eye-dashboard")]
#[command(about = "Eye-health telemetry dashboard")]
pub struct Cli {
    /// Settings file (JSON); missing file means defaults
    #[arg(long, global = true, default_value = "eye-dashboard.json")]
    pub config: PathBuf,

    /// SQLite database holding the eye_health table
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the dashboard page and its JSON API
    Serve {
        /// Address to bind, overrides the settings file
        #[arg(long)]
        bind: Option<SocketAddr>,

        /// Port to bind, keeping the configured host
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Render the dashboard once and print it as JSON
    Export {
        /// Resampling interval, e.g. "5 min" or "1H"
        #[arg(short, long)]
        granularity: Option<String>,

        /// Use the light theme
        #[arg(long)]
        light: bool,

        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// Settings with command-line overrides applied.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(db) = &self.db {
            settings.database_path = db.clone();
        }
        if let Some(Command::Serve { bind, port }) = &self.command {
            if let Some(bind) = bind {
                settings.bind_address = *bind;
            }
            if let Some(port) = port {
                settings.bind_address.set_port(*port);
            }
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["eye-dashboard"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.apply(Settings::default()), Settings::default());
    }

    #[test]
    fn db_and_port_override_settings() {
        let cli =
            Cli::try_parse_from(["eye-dashboard", "serve", "--db", "/tmp/eyes.db", "-p", "9000"])
                .unwrap();

        let settings = cli.apply(Settings::default());

        assert_eq!(settings.database_path, PathBuf::from("/tmp/eyes.db"));
        assert_eq!(settings.bind_address.port(), 9000);
        assert!(settings.bind_address.ip().is_loopback());
    }

    #[test]
    fn export_takes_granularity() {
        let cli = Cli::try_parse_from(["eye-dashboard", "export", "-g", "12H", "--light"]).unwrap();

        match cli.command {
            Some(Command::Export {
                granularity, light, ..
            }) => {
                assert_eq!(granularity.as_deref(), Some("12H"));
                assert!(light);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
