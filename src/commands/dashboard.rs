use clap::ArgMatches;

use crate::catalog::sample::{sample_attending, sample_organized};
use crate::cli_context::CliContext;
use crate::error::ErrorContext;
use crate::formatting::events::{print_dashboard, print_events};

pub async fn handle_dashboard(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let context = CliContext::load().context("Failed to load CLI context")?;

    let organized = sample_organized();
    let attending = sample_attending();

    if matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("dashboard")
        == "json"
    {
        print_events(&organized, "json");
        print_events(&attending, "json");
        return Ok(());
    }

    print_dashboard(&organized, &attending, context.organizer());

    Ok(())
}
