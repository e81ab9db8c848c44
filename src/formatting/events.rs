use colored::*;

use super::utils::*;
use crate::models::{EventRecord, EventStatus, EventType};

pub fn format_status_color(status: EventStatus) -> ColoredString {
    match status {
        EventStatus::Upcoming => "Upcoming".green(),
        EventStatus::Past => "Past".dimmed(),
    }
}

pub fn get_type_icon(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Mountain => "⛰",
        EventType::Road => "🚴",
        EventType::Cross => "🌲",
        EventType::Endurance => "⏱",
        EventType::Other => "•",
    }
}

pub fn print_events(events: &[EventRecord], format: &str) {
    if events.is_empty() {
        println!("{}", "No events found.".dimmed());
        return;
    }

    match format {
        "json" => match serde_json::to_string_pretty(&events) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{} {}", "Failed to serialize events:".red(), e),
        },
        "table" => {
            println!("{}", "─".repeat(110).dimmed());
            println!(
                "{:<5} {:<38} {:<14} {:<20} {:<24}",
                "ID".bold(),
                "Title".bold(),
                "Type".bold(),
                "Date".bold(),
                "Capacity".bold()
            );
            println!("{}", "─".repeat(110).dimmed());

            for event in events {
                println!(
                    "{:<5} {:<38} {:<14} {:<20} {:<24}",
                    event.id.to_string().blue(),
                    truncate(&event.title, 38),
                    event.event_type.label().cyan(),
                    event.date,
                    capacity_color(event)
                );
            }
            println!("{}", "─".repeat(110).dimmed());
        }
        _ => {
            // Group events by type, in the filter bar's order
            for event_type in EventType::ALL {
                let group: Vec<&EventRecord> = events
                    .iter()
                    .filter(|e| e.event_type == event_type)
                    .collect();
                if group.is_empty() {
                    continue;
                }

                println!(
                    "\n{} {} ({})",
                    get_type_icon(event_type),
                    event_type.label().bold(),
                    group.len()
                );
                println!("{}", "─".repeat(50).dimmed());

                for event in group {
                    let preview = clean_description(&event.description);
                    println!(
                        "{} {} - {} ({})",
                        event.id.to_string().blue(),
                        event.title,
                        event.location.cyan(),
                        capacity_color(event)
                    );
                    if !preview.is_empty() {
                        println!("    {}", preview.dimmed());
                    }
                }
            }
        }
    }
}

pub fn print_single_event(event: &EventRecord) {
    println!("\n{}", "═".repeat(80).blue());
    println!(
        "{} {} {}",
        get_type_icon(event.event_type),
        event.title.bold(),
        format!("#{}", event.id).dimmed()
    );
    println!("{}", "─".repeat(80).dimmed());

    println!(
        "{}: {} | {}: {} | {}: {}",
        "Type".dimmed(),
        event.event_type.label().cyan(),
        "Status".dimmed(),
        format_status_color(event.status),
        "Capacity".dimmed(),
        capacity_color(event)
    );

    match &event.time {
        Some(time) => println!("{}: {} · {}", "When".dimmed(), event.date, time),
        None => println!("{}: {}", "When".dimmed(), event.date),
    }
    println!("{}: {}", "Where".dimmed(), event.location.cyan());
    if let Some(address) = &event.address {
        println!("{}: {}", "Address".dimmed(), address);
    }
    if let Some(organizer) = &event.organizer {
        println!("{}: {}", "Organizer".dimmed(), organizer.green());
    }
    if let Some(difficulty) = &event.difficulty {
        println!("{}: {}", "Difficulty".dimmed(), difficulty.yellow());
    }
    if let Some(distance) = &event.distance {
        println!("{}: {}", "Distance".dimmed(), distance);
    }
    if let Some(elevation) = &event.elevation {
        println!("{}: {}", "Elevation".dimmed(), elevation);
    }

    if !event.description.trim().is_empty() {
        println!("\n{}", "About This Event".bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", event.description);
    }

    if let Some(requirements) = &event.requirements {
        if !requirements.is_empty() {
            println!("\n{}", "Requirements".bold());
            println!("{}", "─".repeat(40).dimmed());
            for req in requirements {
                println!("  {} {}", "✓".green(), req);
            }
        }
    }

    if let Some(schedule) = &event.schedule {
        if !schedule.is_empty() {
            println!("\n{}", "Event Schedule".bold());
            println!("{}", "─".repeat(40).dimmed());
            for item in schedule {
                println!("  {:<10} {}", item.time.blue(), item.activity);
            }
        }
    }

    if event.is_fully_booked() {
        println!("\n{}", "This event is fully booked.".red().bold());
    } else if let Some(left) = event.spots_left() {
        println!("\n{}", format!("{} spots remaining.", left).green());
    }

    println!("\n{}", "═".repeat(80).blue());
}

pub fn print_dashboard(organized: &[EventRecord], attending: &[EventRecord], organizer: &str) {
    println!("\n{}", "My Dashboard".bold().blue());
    println!(
        "{}",
        format!("Manage your events and registrations, {}", organizer).dimmed()
    );
    println!("{}", "═".repeat(80).blue());

    println!("\n{} ({})", "Events I'm Organizing".bold(), organized.len());
    println!("{}", "─".repeat(50).dimmed());
    if organized.is_empty() {
        println!("{}", "You haven't created any events yet.".dimmed());
    } else {
        for event in organized {
            println!(
                "{} {} - {} · {} [{}] ({})",
                get_type_icon(event.event_type),
                event.id.to_string().blue(),
                event.title,
                event.date,
                format_status_color(event.status),
                capacity_color(event)
            );
        }
    }

    println!("\n{} ({})", "Events I'm Attending".bold(), attending.len());
    println!("{}", "─".repeat(50).dimmed());
    if attending.is_empty() {
        println!("{}", "You're not registered for any events yet.".dimmed());
    } else {
        for event in attending {
            println!(
                "{} {} - {} · {} · {}",
                get_type_icon(event.event_type),
                event.id.to_string().blue(),
                event.title,
                event.date,
                event.location.cyan()
            );
        }
    }

    println!("\n{}", "═".repeat(80).blue());
}
