use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, EventsError};
use crate::filtering::EventFilter;
use crate::formatting::events::{print_events, print_single_event};

pub async fn handle_events(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let context = CliContext::load().context("Failed to load CLI context")?;

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or_else(|| context.default_format());

    let mut filter = EventFilter::new();

    if let Some(filter_query) = matches.get_one::<String>("filter") {
        filter = EventFilter::parse(filter_query)
            .map_err(|e| EventsError::InvalidInput(format!("Failed to parse filter: {}", e)))
            .with_context(|| format!("Filter query: {}", filter_query))?;
    } else {
        if let Some(event_type) = matches.get_one::<String>("type") {
            filter.event_type = Some(
                event_type
                    .parse()
                    .map_err(EventsError::InvalidInput)?,
            );
        }
        if let Some(query) = matches.get_one::<String>("search") {
            filter.query = Some(query.clone());
        }
    }

    let events = filter.apply(context.store().list_events());

    if events.is_empty() {
        println!("No events found matching your criteria.");
    } else {
        println!("Found {} events:", events.len());
        print_events(&events, format);
    }

    Ok(())
}

pub async fn handle_event(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let context = CliContext::load().context("Failed to load CLI context")?;

    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| EventsError::InvalidInput("Event id is required".to_string()))?
        .parse::<u32>()
        .map_err(|_| EventsError::InvalidInput("Event id must be a number".to_string()))?;

    let event = context.store().get_event(id)?;
    print_single_event(event);

    Ok(())
}
