use std::path::Path;

use clap::Parser;
use partsbench::Config;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Show or modify configuration settings")]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Subcommand,
}

#[derive(Debug, Parser)]
enum Subcommand {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,

        /// Value to set
        value: String,
    },
}

impl ConfigCommand {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config, config_path: Option<&Path>) -> anyhow::Result<()> {
        match self.command {
            Subcommand::Show => {
                println!("Configuration:");
                println!("  base_url: {}", config.base_url());
                println!("  model_year: {}", config.model_year());
                println!("  make_limit: {}", config.make_limit());
                println!("  page_size: {}", config.page_size());
            }
            Subcommand::Set { key, value } => {
                let Some(path) = config_path else {
                    anyhow::bail!("--config PATH is required when setting values");
                };

                let mut config = if path.exists() {
                    Config::load(path).map_err(|e| anyhow::anyhow!(e))?
                } else {
                    Config::default()
                };

                match key.as_str() {
                    "base_url" => config.set_base_url(value.clone()),
                    "model_year" => config.set_model_year(
                        value
                            .parse()
                            .map_err(|_| anyhow::anyhow!("Value must be a model year"))?,
                    ),
                    "make_limit" => config.set_make_limit(
                        value
                            .parse()
                            .map_err(|_| anyhow::anyhow!("Value must be a non-negative integer"))?,
                    ),
                    "page_size" => config.set_page_size(
                        value
                            .parse()
                            .map_err(|_| anyhow::anyhow!("Value must be a non-negative integer"))?,
                    ),
                    _ => {
                        return Err(anyhow::anyhow!(
                            "Unknown configuration key: '{key}'\nSupported keys: base_url, \
                             model_year, make_limit, page_size",
                        ));
                    }
                }

                config.save(path).map_err(|e| anyhow::anyhow!(e))?;
                println!("{}", format!("Set {key} = {value}").success());
            }
        }

        Ok(())
    }
}
