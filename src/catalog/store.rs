use std::time::Duration;

use crate::constants::SIMULATED_LATENCY_MS;
use crate::error::{EventsError, EventsResult};
use crate::models::{EventDraft, EventRecord, EventStatus, RegistrationForm};

/// In-memory event catalog.
///
/// Seeded once at startup and owned by whichever view is using it; there is
/// no persistence behind it. Mutating operations that stand in for a network
/// call (`create_event`, `register`) await a fixed simulated latency so the
/// UI can show its submitting state.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<EventRecord>,
    next_id: u32,
    latency: Duration,
}

impl EventStore {
    /// Store backed by the given fixture records.
    pub fn with_events(events: Vec<EventRecord>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            events,
            next_id,
            latency: Duration::from_millis(SIMULATED_LATENCY_MS),
        }
    }

    /// Store seeded with the built-in sample catalog.
    pub fn seeded() -> Self {
        Self::with_events(super::sample::sample_events())
    }

    /// Override the simulated submit latency (tests use zero).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// All events in seeded order.
    pub fn list_events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look an event up by id. Unknown ids are an explicit error rather than
    /// a silent fallback to the first record.
    pub fn get_event(&self, id: u32) -> EventsResult<&EventRecord> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or(EventsError::NotFound(id))
    }

    /// Validate and append a new event, returning its assigned id.
    pub async fn create_event(&mut self, draft: EventDraft) -> EventsResult<u32> {
        draft.validate()?;
        tokio::time::sleep(self.latency).await;

        let id = self.next_id;
        self.next_id += 1;

        let record = EventRecord {
            id,
            title: draft.title.trim().to_string(),
            date: draft.date_text(),
            time: draft.time_text(),
            location: draft.location.trim().to_string(),
            address: Some(draft.address.trim().to_string()).filter(|a| !a.is_empty()),
            event_type: draft.event_type,
            participants: 0,
            max_participants: draft.max_participants,
            description: draft.description.trim().to_string(),
            organizer: None,
            difficulty: draft.difficulty.clone(),
            distance: draft.distance.clone(),
            elevation: None,
            requirements: Some(draft.requirements.clone()).filter(|r| !r.is_empty()),
            schedule: None,
            image: crate::constants::PLACEHOLDER_IMAGE.to_string(),
            status: EventStatus::Upcoming,
        };
        self.events.push(record);
        Ok(id)
    }

    /// Register an attendee for an event, incrementing its participant count.
    pub async fn register(&mut self, id: u32, form: &RegistrationForm) -> EventsResult<()> {
        form.validate()?;

        // Capacity check before the simulated call, matching the UI guard.
        let event = self.get_event(id)?;
        if event.is_fully_booked() {
            return Err(EventsError::CapacityExceeded {
                id,
                max: event.max_participants.unwrap_or(event.participants),
            });
        }

        tokio::time::sleep(self.latency).await;

        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EventsError::NotFound(id))?;
        event.participants += 1;
        Ok(())
    }

    /// Remove an event, returning the removed record.
    pub fn delete_event(&mut self, id: u32) -> EventsResult<EventRecord> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(EventsError::NotFound(id))?;
        Ok(self.events.remove(index))
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::seeded()
    }
}
