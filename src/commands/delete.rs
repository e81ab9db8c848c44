use std::io::{self, BufRead, Write};

use clap::ArgMatches;
use colored::*;

use crate::catalog::sample::sample_organized;
use crate::catalog::EventStore;
use crate::error::{EventsError, EventsResult};

pub async fn handle_delete(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_delete_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_delete_impl(matches: &ArgMatches) -> EventsResult<()> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| EventsError::InvalidInput("Event id is required".to_string()))?
        .parse::<u32>()
        .map_err(|_| EventsError::InvalidInput("Event id must be a number".to_string()))?;

    // Deletion acts on the events the current user organizes.
    let mut store = EventStore::with_events(sample_organized());
    let title = store.get_event(id)?.title.clone();

    if !matches.get_flag("yes") {
        print!(
            "Delete \"{}\"? This action cannot be undone. [y/N] ",
            title.bold()
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("{}", "Deletion cancelled.".dimmed());
            return Ok(());
        }
    }

    let removed = store.delete_event(id)?;

    println!("{} {}", "✅".green(), "Event deleted.".green().bold());
    println!("{}: {}", "Title".bold(), removed.title);
    println!(
        "{}: {}",
        "Remaining organized events".bold(),
        store.len()
    );

    Ok(())
}
