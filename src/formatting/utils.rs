use colored::*;

use crate::models::EventRecord;

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Capacity column colored by how close the event is to filling up.
pub fn capacity_color(event: &EventRecord) -> ColoredString {
    let text = event.capacity_text();
    match event.max_participants {
        Some(_) if event.is_fully_booked() => text.red().bold(),
        Some(_) if event.spots_left().map_or(false, |left| left <= 10) => text.yellow(),
        Some(_) => text.green(),
        None => text.normal(),
    }
}

pub fn clean_description(desc: &str) -> String {
    let first_line = desc
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    let trimmed = first_line.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.ends_with('.') || trimmed.ends_with('!') || trimmed.ends_with('?') {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}
