use crate::models::{EventRecord, EventStatus, EventType};

/// Client-side filter over the event catalog.
///
/// All criteria are conjunctive and the catalog order is preserved; an empty
/// filter is the identity ("all" tab with no search query).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub event_type: Option<EventType>,
    pub query: Option<String>,
    pub status: Option<EventStatus>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_type(event_type: EventType) -> Self {
        Self {
            event_type: Some(event_type),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.event_type.is_none() && self.query.is_none() && self.status.is_none()
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        if let Some(event_type) = self.event_type {
            if event.event_type != event_type {
                return false;
            }
        }
        if let Some(status) = self.status {
            if event.status != status {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            if !needle.is_empty()
                && !event.title.to_lowercase().contains(&needle)
                && !event.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }

    /// Filtered copy of the events, original order preserved.
    pub fn apply(&self, events: &[EventRecord]) -> Vec<EventRecord> {
        events
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }

    /// Parse the CLI shorthand, e.g. `"type:mountain status:upcoming trail"`.
    /// Unprefixed words become the search query.
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut filter = Self::default();
        let mut query_words = Vec::new();

        for token in input.split_whitespace() {
            if let Some(value) = token.strip_prefix("type:") {
                filter.event_type = Some(value.parse()?);
            } else if let Some(value) = token.strip_prefix("status:") {
                filter.status = Some(match value.to_lowercase().as_str() {
                    "upcoming" => EventStatus::Upcoming,
                    "past" => EventStatus::Past,
                    other => return Err(format!("Unknown status: {}", other)),
                });
            } else {
                query_words.push(token);
            }
        }

        if !query_words.is_empty() {
            filter.query = Some(query_words.join(" "));
        }
        Ok(filter)
    }
}

/// The listing view's category tabs: `filter_by_type(None)` is the "all" tab.
pub fn filter_by_type(events: &[EventRecord], tab: Option<EventType>) -> Vec<EventRecord> {
    match tab {
        Some(event_type) => EventFilter::by_type(event_type).apply(events),
        None => events.to_vec(),
    }
}

/// Case-insensitive substring search over title and description.
pub fn search(events: &[EventRecord], query: &str) -> Vec<EventRecord> {
    let filter = EventFilter {
        query: Some(query.to_string()),
        ..EventFilter::default()
    };
    filter.apply(events)
}
