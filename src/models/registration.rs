use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{EventsError, EventsResult};
use crate::models::EventType;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex");
}

/// Attendee details collected by the registration dialog.
/// Lives only for the duration of the dialog; dropped on close or submit.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "emergencyContact")]
    pub emergency_contact: String,
}

impl RegistrationForm {
    /// Reports the first missing or malformed field.
    pub fn validate(&self) -> EventsResult<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("emergency contact", &self.emergency_contact),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(EventsError::validation(field, "is required"));
            }
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(EventsError::validation(
                "email",
                "does not look like a valid address",
            ));
        }
        Ok(())
    }
}

/// User-editable fields of a new event, as collected by the creation form.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub event_type: EventType,
    pub date: Option<NaiveDate>,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub address: String,
    pub description: String,
    pub difficulty: Option<String>,
    pub distance: Option<String>,
    pub max_participants: Option<u32>,
    pub requirements: Vec<String>,
}

impl EventDraft {
    pub fn validate(&self) -> EventsResult<()> {
        if self.title.trim().is_empty() {
            return Err(EventsError::validation("title", "is required"));
        }
        if self.date.is_none() {
            return Err(EventsError::validation("date", "is required"));
        }
        if self.location.trim().is_empty() {
            return Err(EventsError::validation("location", "is required"));
        }
        if self.description.trim().is_empty() {
            return Err(EventsError::validation("description", "is required"));
        }
        Ok(())
    }

    /// Display string for the event card, e.g. "April 15, 2025".
    pub fn date_text(&self) -> String {
        self.date
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }

    /// "8:00 AM - 4:00 PM" when both ends are given.
    pub fn time_text(&self) -> Option<String> {
        match (self.start_time.trim(), self.end_time.trim()) {
            ("", "") => None,
            (start, "") => Some(start.to_string()),
            ("", end) => Some(end.to_string()),
            (start, end) => Some(format!("{} - {}", start, end)),
        }
    }
}
