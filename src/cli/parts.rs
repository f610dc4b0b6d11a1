use clap::Parser;
use partsbench::{CatalogStore, Category, Config, PartsDb, SpecsCache};
use tracing::{instrument, warn};

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Show parts in a category compatible with a vehicle")]
pub struct Parts {
    /// Part category (engine, suspension, exhaust, brakes, wheels)
    #[arg(value_parser = super::parse_category)]
    category: Category,

    /// Search term identifying the vehicle; the first match is used
    #[arg(long, short)]
    vehicle: String,

    /// Use the built-in sample catalog instead of the network
    #[arg(long)]
    offline: bool,
}

impl Parts {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let source = super::vehicle_source(self.offline, config)?;
        let mut store = CatalogStore::new();
        store.load(source.as_ref(), &config.load_options())?;

        let matches = store.search(&self.vehicle);
        let Some(vehicle) = matches.first() else {
            anyhow::bail!("no vehicle matches '{}'", self.vehicle);
        };

        let mut specs = SpecsCache::new();
        match specs.get_or_fetch(vehicle, source.as_ref()) {
            Ok(specs) => println!(
                "{} {}",
                vehicle.full_name().emphasis(),
                format!("({})", specs.vehicle_type).dim()
            ),
            Err(error) => {
                // Specs are cosmetic here; the parts listing still works.
                warn!(%error, "could not fetch vehicle specs");
                println!("{}", vehicle.full_name().emphasis());
            }
        }

        let db = PartsDb::stock();
        let compatible = db.compatible_parts(self.category, vehicle);

        if compatible.is_empty() {
            println!(
                "No compatible {} parts for this vehicle.",
                self.category
            );
            return Ok(());
        }

        println!();
        for part in &compatible {
            println!(
                "{:<28} {:<20} ${}",
                part.name().as_str(),
                part.brand().dim(),
                part.price()
            );
            println!("  {}", part.description().dim());
        }
        println!(
            "\n{}",
            format!(
                "{} of {} {} parts fit",
                compatible.len(),
                db.parts_in(self.category).len(),
                self.category
            )
            .dim()
        );

        Ok(())
    }
}
