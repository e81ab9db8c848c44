use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single entry in an event's day-of schedule.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub time: String,
    pub activity: String,
}

/// Category an event belongs to; the listing view filters on this.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Mountain,
    Road,
    Cross,
    Endurance,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Mountain,
        EventType::Road,
        EventType::Cross,
        EventType::Endurance,
        EventType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Mountain => "Mountain",
            EventType::Road => "Road",
            EventType::Cross => "Cross-Country",
            EventType::Endurance => "Endurance",
            EventType::Other => "Other",
        }
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::Other
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventType::Mountain => "mountain",
            EventType::Road => "road",
            EventType::Cross => "cross",
            EventType::Endurance => "endurance",
            EventType::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mountain" => Ok(EventType::Mountain),
            "road" => Ok(EventType::Road),
            "cross" | "cross-country" => Ok(EventType::Cross),
            "endurance" => Ok(EventType::Endurance),
            "other" => Ok(EventType::Other),
            _ => Err(format!("Unknown event type: {}", s)),
        }
    }
}

/// Dashboard classification of an event relative to today.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EventRecord {
    pub id: u32,
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub participants: u32,
    #[serde(rename = "maxParticipants", skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduleItem>>,
    pub image: String,
    pub status: EventStatus,
}

impl EventRecord {
    /// No max_participants means unlimited capacity.
    pub fn is_fully_booked(&self) -> bool {
        self.max_participants
            .map(|max| self.participants >= max)
            .unwrap_or(false)
    }

    pub fn spots_left(&self) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(self.participants))
    }

    /// "45 registered" or "45 / 75 registered" when capped.
    pub fn capacity_text(&self) -> String {
        match self.max_participants {
            Some(max) => format!("{} / {} registered", self.participants, max),
            None => format!("{} registered", self.participants),
        }
    }
}
