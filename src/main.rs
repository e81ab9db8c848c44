use std::process;

use clap::{Arg, Command};

use bikevents::commands::{
    config::handle_config, create::handle_create_event, dashboard::handle_dashboard,
    delete::handle_delete, events::{handle_event, handle_events}, register::handle_register,
};
use bikevents::interactive::run_interactive_mode;
use bikevents::logging::{init_logging, log_error, log_info, log_panic_info};

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
    }));

    let app = Command::new("bikevents")
        .about("Bikevents - Browse, create, and manage biking events from the terminal")
        .version("1.0.0")
        .subcommand(
            Command::new("events")
                .about("List and filter events")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('t')
                        .value_name("TYPE")
                        .help("Filter by category: mountain, road, cross, endurance, other")
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .value_name("QUERY")
                        .help("Search in event titles and descriptions")
                )
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .value_name("FILTER")
                        .help("Combined filter, e.g. \"type:mountain status:upcoming trail\"")
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, table, json")
                )
        )
        .subcommand(
            Command::new("event")
                .about("View a single event with full details")
                .arg(
                    Arg::new("id")
                        .value_name("EVENT_ID")
                        .help("Event id (e.g., 1)")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("register")
                .about("Register for an event")
                .arg(
                    Arg::new("id")
                        .value_name("EVENT_ID")
                        .help("Event id to register for")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .value_name("NAME")
                        .help("Attendee full name")
                        .required(true)
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .value_name("EMAIL")
                        .help("Attendee email address")
                        .required(true)
                )
                .arg(
                    Arg::new("phone")
                        .long("phone")
                        .short('p')
                        .value_name("PHONE")
                        .help("Attendee phone number")
                        .required(true)
                )
                .arg(
                    Arg::new("emergency")
                        .long("emergency")
                        .value_name("CONTACT")
                        .help("Emergency contact (name and phone)")
                        .required(true)
                )
        )
        .subcommand(
            Command::new("create")
                .about("Create a new event")
                .arg(
                    Arg::new("title")
                        .value_name("TITLE")
                        .help("Event title")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('t')
                        .value_name("TYPE")
                        .help("Category: mountain, road, cross, endurance, other")
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .short('d')
                        .value_name("DATE")
                        .help("Event date (YYYY-MM-DD)")
                        .required(true)
                )
                .arg(
                    Arg::new("start-time")
                        .long("start-time")
                        .value_name("TIME")
                        .help("Start time, e.g. \"8:00 AM\"")
                )
                .arg(
                    Arg::new("end-time")
                        .long("end-time")
                        .value_name("TIME")
                        .help("End time, e.g. \"4:00 PM\"")
                )
                .arg(
                    Arg::new("location")
                        .long("location")
                        .short('l')
                        .value_name("LOCATION")
                        .help("Venue name")
                        .required(true)
                )
                .arg(
                    Arg::new("address")
                        .long("address")
                        .value_name("ADDRESS")
                        .help("Full address")
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .value_name("TEXT")
                        .help("Event description")
                        .required(true)
                )
                .arg(
                    Arg::new("difficulty")
                        .long("difficulty")
                        .value_name("LEVEL")
                        .help("Difficulty: Beginner, Intermediate, Advanced, Expert")
                )
                .arg(
                    Arg::new("distance")
                        .long("distance")
                        .value_name("DISTANCE")
                        .help("Course distance, e.g. \"25 miles\"")
                )
                .arg(
                    Arg::new("max-participants")
                        .long("max-participants")
                        .short('m')
                        .value_name("NUMBER")
                        .help("Participant cap (omit for unlimited)")
                )
                .arg(
                    Arg::new("requirement")
                        .long("requirement")
                        .short('r')
                        .value_name("TEXT")
                        .help("Requirement line (repeatable)")
                        .action(clap::ArgAction::Append)
                )
        )
        .subcommand(
            Command::new("dashboard")
                .about("Show your organized and attended events")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: dashboard, json")
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an event you organize")
                .arg(
                    Arg::new("id")
                        .value_name("EVENT_ID")
                        .help("Event id to delete")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(clap::ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("config")
                .about("Show or change configuration")
                .arg(
                    Arg::new("organizer")
                        .long("organizer")
                        .value_name("NAME")
                        .help("Set your organizer display name")
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("Set the default output format: simple, table, json")
                )
        )
        .subcommand(
            Command::new("interactive")
                .about("Start the interactive terminal UI")
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("events", sub_matches)) => handle_events(sub_matches).await,
        Some(("event", sub_matches)) => handle_event(sub_matches).await,
        Some(("register", sub_matches)) => handle_register(sub_matches).await,
        Some(("create", sub_matches)) => handle_create_event(sub_matches).await,
        Some(("dashboard", sub_matches)) => handle_dashboard(sub_matches).await,
        Some(("delete", sub_matches)) => handle_delete(sub_matches).await,
        Some(("config", sub_matches)) => handle_config(sub_matches).await,
        Some(("interactive", _)) | None => {
            log_info("Starting interactive mode");
            run_interactive_mode().await
        }
        _ => {
            eprintln!("Unknown command. Use 'bikevents --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
