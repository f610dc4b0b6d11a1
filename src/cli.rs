use std::path::{Path, PathBuf};

mod browse;
mod categories;
mod config;
mod parts;
mod terminal;
mod vehicles;

use browse::Browse;
use categories::Categories;
use clap::ArgAction;
use config::ConfigCommand;
use parts::Parts;
use partsbench::{Category, Config, StaticSource, VehicleSource, VpicClient};
use vehicles::Vehicles;

/// Parse a part category from a string.
///
/// This is a CLI boundary function; parsing is case-insensitive and an
/// unknown category produces a descriptive error instead of an empty view.
fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;

        self.command
            .unwrap_or_else(|| Command::Vehicles(Vehicles::default()))
            .run(&config, self.config.as_deref())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(Config::default()),
    }
}

/// The vehicle source implied by the offline flag and configuration.
fn vehicle_source(offline: bool, config: &Config) -> anyhow::Result<Box<dyn VehicleSource>> {
    if offline {
        Ok(Box::new(StaticSource::sample()))
    } else {
        Ok(Box::new(VpicClient::new(config.base_url())?))
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List vehicles from the catalog (default)
    Vehicles(Vehicles),

    /// List part categories
    Categories(Categories),

    /// Show parts in a category compatible with a vehicle
    Parts(Parts),

    /// Interactively browse vehicles and assemble a build
    Browse(Browse),

    /// Show or modify configuration settings
    Config(ConfigCommand),
}

impl Command {
    fn run(self, config: &Config, config_path: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Self::Vehicles(command) => command.run(config)?,
            Self::Categories(command) => command.run()?,
            Self::Parts(command) => command.run(config)?,
            Self::Browse(command) => command.run(config)?,
            Self::Config(command) => command.run(config, config_path)?,
        }
        Ok(())
    }
}
