use clap::Parser;
use partsbench::{Category, PartsDb};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "List part categories")]
pub struct Categories {}

impl Categories {
    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        let db = PartsDb::stock();

        for category in Category::ALL {
            let count = db.parts_in(category).len();
            println!("{:<12} {}", category.to_string().emphasis(), format!("{count} parts").dim());
        }

        Ok(())
    }
}
