use clap::Parser;
use partsbench::{
    CatalogStore, Config,
    catalog::{SEARCH_LIMIT, paginate},
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "List vehicles from the catalog")]
pub struct Vehicles {
    /// Case-insensitive search term matched against the full display name
    #[arg(long, short)]
    search: Option<String>,

    /// 0-indexed page of results (ignored when searching)
    #[arg(long, short, default_value_t = 0)]
    page: usize,

    /// Use the built-in sample catalog instead of the network
    #[arg(long)]
    offline: bool,
}

impl Vehicles {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let source = super::vehicle_source(self.offline, config)?;
        let mut store = CatalogStore::new();
        let count = store.load(source.as_ref(), &config.load_options())?;

        if store.is_empty() {
            println!("No vehicles found.");
            return Ok(());
        }

        if let Some(term) = &self.search {
            let matches = store.search(term);
            if matches.is_empty() {
                println!("No vehicles match '{term}'.");
                return Ok(());
            }
            for vehicle in &matches {
                println!("{}", vehicle.full_name());
            }
            println!(
                "\n{}",
                format!(
                    "{} matches out of {count} vehicles (capped at {SEARCH_LIMIT})",
                    matches.len()
                )
                .dim()
            );
            return Ok(());
        }

        let page = paginate(store.vehicles(), self.page, config.page_size());
        if page.visible.is_empty() {
            println!("Page {} is out of range.", self.page);
            return Ok(());
        }

        for vehicle in page.visible {
            println!("{}", vehicle.full_name());
        }

        let mut hints = Vec::new();
        if page.has_prev {
            hints.push(format!("--page {} for previous", self.page - 1));
        }
        if page.has_next {
            hints.push(format!("--page {} for next", self.page + 1));
        }
        println!(
            "\n{}",
            format!(
                "Page {} ({} of {count} vehicles){}{}",
                self.page,
                page.visible.len(),
                if hints.is_empty() { "" } else { ". " },
                hints.join(", ")
            )
            .dim()
        );

        Ok(())
    }
}
