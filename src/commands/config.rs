use clap::ArgMatches;
use colored::*;

use crate::config::{load_config, save_config};
use crate::error::{ErrorContext, EventsResult};

pub async fn handle_config(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_config_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_config_impl(matches: &ArgMatches) -> EventsResult<()> {
    let mut config = load_config();
    let mut changed = false;

    if let Some(name) = matches.get_one::<String>("organizer") {
        config.organizer = Some(name.clone());
        changed = true;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config.default_format = Some(format.clone());
        changed = true;
    }

    if changed {
        save_config(&config).context("Saving configuration")?;
        println!("{} {}", "✅".green(), "Configuration saved.".green().bold());
    }

    println!(
        "{}: {}",
        "Organizer".bold(),
        config.organizer.as_deref().unwrap_or("(not set)")
    );
    println!(
        "{}: {}",
        "Default format".bold(),
        config.default_format.as_deref().unwrap_or("simple")
    );

    Ok(())
}
