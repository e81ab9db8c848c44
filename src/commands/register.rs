use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, EventsError, EventsResult};
use crate::models::RegistrationForm;

pub async fn handle_register(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_register_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_register_impl(matches: &ArgMatches) -> EventsResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;

    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| EventsError::InvalidInput("Event id is required".to_string()))?
        .parse::<u32>()
        .map_err(|_| EventsError::InvalidInput("Event id must be a number".to_string()))?;

    let arg = |name: &str| {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default()
    };

    let form = RegistrationForm {
        name: arg("name"),
        email: arg("email"),
        phone: arg("phone"),
        emergency_contact: arg("emergency"),
    };

    let title = context.store().get_event(id)?.title.clone();

    context
        .store_mut()
        .register(id, &form)
        .await
        .with_context(|| format!("Registering for event {}", id))?;

    let event = context.store().get_event(id)?;
    println!(
        "{} {}",
        "✅".green(),
        "Registration successful!".green().bold()
    );
    println!("{}: {}", "Event".bold(), title);
    println!("{}: {}", "Attendee".bold(), form.name);
    println!("{}: {}", "Capacity".bold(), event.capacity_text());

    Ok(())
}
