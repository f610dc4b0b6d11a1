use clap::Parser;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use partsbench::{
    Category, Config, PartsDb, Price, Session, SpecsError, Vehicle, VehicleId, VehicleSource,
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Interactively browse vehicles and assemble a build")]
pub struct Browse {
    /// Use the built-in sample catalog instead of the network
    #[arg(long)]
    offline: bool,
}

impl Browse {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let source = super::vehicle_source(self.offline, config)?;

        let mut session = Session::new(PartsDb::stock(), config.page_size());
        println!("Loading vehicle catalog...");
        match session.load_catalog(source.as_ref(), &config.load_options()) {
            Ok(count) => println!("{}", format!("Loaded {count} vehicles.").success()),
            Err(error) => {
                // Not fatal: the session simply has no vehicles to offer.
                println!(
                    "{}",
                    format!("Could not load the vehicle catalog: {error}").warning()
                );
            }
        }

        loop {
            let choices = [
                "Select a vehicle",
                "Search vehicles",
                "View parts",
                "View build",
                "Remove a part",
                "Quit",
            ];
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(status_line(&session))
                .items(&choices)
                .default(0)
                .interact()?;

            match choice {
                0 => select_vehicle(&mut session)?,
                1 => search_vehicles(&mut session)?,
                2 => view_parts(&mut session, source.as_ref())?,
                3 => print_build(&session),
                4 => remove_part(&mut session)?,
                _ => break,
            }
        }

        print_build(&session);
        Ok(())
    }
}

/// One-line summary of the session shown as the menu prompt.
fn status_line(session: &Session) -> String {
    let vehicle = session
        .selected_vehicle()
        .map_or_else(|| "no vehicle selected".to_string(), Vehicle::full_name);
    let build = session.build();
    format!(
        "{vehicle} | build: {} parts, ${}",
        build.len(),
        format_amount(build.total())
    )
}

/// Formats a raw total the way prices print.
fn format_amount(amount: f64) -> String {
    Price::new(amount).map_or_else(|_| amount.to_string(), |price| price.to_string())
}

/// Paged vehicle picker.
fn select_vehicle(session: &mut Session) -> anyhow::Result<()> {
    loop {
        let page = session.current_page();
        let ids: Vec<VehicleId> = page.visible.iter().map(Vehicle::id).collect();
        let mut items: Vec<String> = page.visible.iter().map(Vehicle::full_name).collect();
        let (has_prev, has_next) = (page.has_prev, page.has_next);

        if ids.is_empty() && !has_prev {
            println!("{}", "The catalog is empty.".warning());
            return Ok(());
        }

        if has_prev {
            items.push("< Previous page".to_string());
        }
        if has_next {
            items.push("> Next page".to_string());
        }
        items.push("Back".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Select a vehicle (page {})", session.page_number()))
            .items(&items)
            .default(0)
            .interact()?;

        if choice < ids.len() {
            let vehicle = session.select(ids[choice].clone())?;
            println!("{}", format!("Selected {}", vehicle.full_name()).success());
            return Ok(());
        }

        let mut offset = choice - ids.len();
        if has_prev {
            if offset == 0 {
                session.prev_page();
                continue;
            }
            offset -= 1;
        }
        if has_next && offset == 0 {
            session.next_page();
            continue;
        }

        return Ok(());
    }
}

/// Search-then-pick flow.
fn search_vehicles(session: &mut Session) -> anyhow::Result<()> {
    let term: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Search term")
        .allow_empty(true)
        .interact_text()?;

    let matches: Vec<(String, VehicleId)> = session
        .search(&term)
        .iter()
        .map(|vehicle| (vehicle.full_name(), vehicle.id()))
        .collect();

    if matches.is_empty() {
        println!("No vehicles match '{term}'.");
        return Ok(());
    }

    let mut items: Vec<String> = matches.iter().map(|(name, _)| name.clone()).collect();
    items.push("Back".to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Matches")
        .items(&items)
        .default(0)
        .interact()?;

    if let Some((_, id)) = matches.get(choice) {
        let vehicle = session.select(id.clone())?;
        println!("{}", format!("Selected {}", vehicle.full_name()).success());
    }

    Ok(())
}

/// Category picker, compatible parts listing, and add-to-build.
fn view_parts(session: &mut Session, source: &dyn VehicleSource) -> anyhow::Result<()> {
    if session.selected_vehicle().is_none() {
        println!("{}", "Select a vehicle first.".warning());
        return Ok(());
    }

    match session.specs_for_selected(source) {
        Ok(specs) => {
            let vehicle_type = specs.vehicle_type.clone();
            let name = session
                .selected_vehicle()
                .map_or_else(String::new, Vehicle::full_name);
            println!("{} {}", name.emphasis(), format!("({vehicle_type})").dim());
        }
        Err(SpecsError::Load(error)) => {
            // Specs are cosmetic; the parts listing still works.
            println!("{}", format!("Could not load specs: {error}").warning());
        }
        Err(SpecsError::Session(error)) => return Err(error.into()),
    }

    let mut items: Vec<String> = Category::ALL.iter().map(ToString::to_string).collect();
    items.push("Back".to_string());
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Category")
        .items(&items)
        .default(0)
        .interact()?;
    let Some(&category) = Category::ALL.get(choice) else {
        return Ok(());
    };

    let entries: Vec<(String, String)> = session
        .compatible_parts(category)?
        .iter()
        .map(|part| {
            (
                format!(
                    "{} ({}) ${} - {}",
                    part.name(),
                    part.brand(),
                    part.price(),
                    part.description()
                ),
                part.name().as_str().to_string(),
            )
        })
        .collect();

    if entries.is_empty() {
        println!("No compatible {category} parts for this vehicle.");
        return Ok(());
    }

    let mut items: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
    items.push("Back".to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Add a {category} part to the build"))
        .items(&items)
        .default(0)
        .interact()?;

    if let Some((_, name)) = entries.get(choice) {
        session.add_to_build(category, name)?;
        println!(
            "{}",
            format!(
                "Added {name}. Build total: ${}",
                format_amount(session.build().total())
            )
            .success()
        );
    }

    Ok(())
}

/// Prints the current build and its total.
fn print_build(session: &Session) {
    let build = session.build();
    if build.is_empty() {
        println!("The build is empty.");
        return;
    }

    println!("\nCurrent build:");
    for selection in build.selections() {
        println!(
            "  {:<12} {:<30} ${}",
            selection.category.to_string().dim(),
            selection.name,
            selection.price
        );
    }
    println!(
        "  {}",
        format!("Total: ${}", format_amount(build.total())).emphasis()
    );
    println!();
}

/// Removes every build entry with a chosen name.
fn remove_part(session: &mut Session) -> anyhow::Result<()> {
    let mut names: Vec<String> = session
        .build()
        .selections()
        .iter()
        .map(|selection| selection.name.clone())
        .collect();
    names.sort();
    names.dedup();

    if names.is_empty() {
        println!("The build is empty.");
        return Ok(());
    }

    let mut items = names.clone();
    items.push("Back".to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Remove which part? (removes every matching entry)")
        .items(&items)
        .default(0)
        .interact()?;

    if let Some(name) = names.get(choice) {
        session.remove_from_build(name);
        println!(
            "{}",
            format!(
                "Removed {name}. Build total: ${}",
                format_amount(session.build().total())
            )
            .success()
        );
    }

    Ok(())
}
