use chrono::NaiveDate;
use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, EventsError, EventsResult};
use crate::models::EventDraft;

pub async fn handle_create_event(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_create_event_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_create_event_impl(matches: &ArgMatches) -> EventsResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;

    let title = matches
        .get_one::<String>("title")
        .cloned()
        .ok_or_else(|| EventsError::InvalidInput("Title is required".to_string()))?;

    let event_type = matches
        .get_one::<String>("type")
        .map(|s| s.parse())
        .transpose()
        .map_err(EventsError::InvalidInput)?
        .unwrap_or_default();

    let date = matches
        .get_one::<String>("date")
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .map_err(|_| EventsError::InvalidInput("Date must be YYYY-MM-DD".to_string()))?;

    let max_participants = matches
        .get_one::<String>("max-participants")
        .map(|s| s.parse::<u32>())
        .transpose()
        .map_err(|_| EventsError::InvalidInput("Max participants must be a number".to_string()))?;

    let requirements: Vec<String> = matches
        .get_many::<String>("requirement")
        .map(|reqs| reqs.cloned().collect())
        .unwrap_or_default();

    let arg = |name: &str| matches.get_one::<String>(name).cloned();

    let draft = EventDraft {
        title,
        event_type,
        date,
        start_time: arg("start-time").unwrap_or_default(),
        end_time: arg("end-time").unwrap_or_default(),
        location: arg("location").unwrap_or_default(),
        address: arg("address").unwrap_or_default(),
        description: arg("description").unwrap_or_default(),
        difficulty: arg("difficulty"),
        distance: arg("distance"),
        max_participants,
        requirements,
    };

    let id = context
        .store_mut()
        .create_event(draft)
        .await
        .context("Creating event")?;

    let event = context.store().get_event(id)?;
    println!("{} {}", "✅".green(), "Event created successfully!".green().bold());
    println!("{}: {}", "ID".bold(), id.to_string().bright_blue().bold());
    println!("{}: {}", "Title".bold(), event.title);
    println!("{}: {}", "Type".bold(), event.event_type.label());
    println!("{}: {}", "Date".bold(), event.date);

    Ok(())
}
