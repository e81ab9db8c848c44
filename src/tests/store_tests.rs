use std::time::Duration;

use crate::catalog::EventStore;
use crate::error::EventsError;
use crate::models::{EventDraft, EventType, RegistrationForm};

fn test_store() -> EventStore {
    EventStore::seeded().with_latency(Duration::ZERO)
}

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        name: "Alex Rider".to_string(),
        email: "alex@example.com".to_string(),
        phone: "555-0100".to_string(),
        emergency_contact: "Sam Rider 555-0101".to_string(),
    }
}

#[test]
fn test_get_event_returns_matching_record_for_every_seeded_id() {
    let store = test_store();
    let ids: Vec<u32> = store.list_events().iter().map(|e| e.id).collect();

    for id in ids {
        let event = store.get_event(id).unwrap();
        assert_eq!(event.id, id);
    }
}

#[test]
fn test_get_event_unknown_id_is_not_found() {
    let store = test_store();
    match store.get_event(999) {
        Err(EventsError::NotFound(999)) => {}
        other => panic!("Expected NotFound(999), got {:?}", other.map(|e| e.id)),
    }
}

#[tokio::test]
async fn test_register_increments_participants() {
    let mut store = test_store();
    let before = store.get_event(1).unwrap().participants;

    store.register(1, &valid_form()).await.unwrap();

    assert_eq!(store.get_event(1).unwrap().participants, before + 1);
}

#[tokio::test]
async fn test_register_fully_booked_event_is_rejected() {
    let store = test_store();
    let mut event = store.get_event(1).unwrap().clone();
    event.participants = 75;
    event.max_participants = Some(75);
    let mut store = EventStore::with_events(vec![event]).with_latency(Duration::ZERO);

    match store.register(1, &valid_form()).await {
        Err(EventsError::CapacityExceeded { id: 1, max: 75 }) => {}
        other => panic!("Expected CapacityExceeded, got {:?}", other),
    }
    assert_eq!(store.get_event(1).unwrap().participants, 75);
}

#[tokio::test]
async fn test_register_unlimited_event_always_succeeds() {
    let store = test_store();
    let mut event = store.get_event(1).unwrap().clone();
    event.participants = 10_000;
    event.max_participants = None;
    let mut store = EventStore::with_events(vec![event]).with_latency(Duration::ZERO);

    store.register(1, &valid_form()).await.unwrap();
    assert_eq!(store.get_event(1).unwrap().participants, 10_001);
}

#[tokio::test]
async fn test_register_invalid_form_is_a_validation_error() {
    let mut store = test_store();
    let mut form = valid_form();
    form.email = "not-an-email".to_string();

    match store.register(1, &form).await {
        Err(EventsError::Validation { field, .. }) => assert_eq!(field, "email"),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_event_appends_with_next_id() {
    let mut store = test_store();
    let before = store.len();
    let max_id = store.list_events().iter().map(|e| e.id).max().unwrap();

    let draft = EventDraft {
        title: "Sunrise Gravel Loop".to_string(),
        event_type: EventType::Road,
        date: chrono::NaiveDate::from_ymd_opt(2025, 6, 14),
        location: "North Ridge Park".to_string(),
        description: "An easy gravel spin to watch the sunrise.".to_string(),
        ..EventDraft::default()
    };

    let id = store.create_event(draft).await.unwrap();

    assert_eq!(id, max_id + 1);
    assert_eq!(store.len(), before + 1);

    let created = store.get_event(id).unwrap();
    assert_eq!(created.title, "Sunrise Gravel Loop");
    assert_eq!(created.participants, 0);
    assert_eq!(created.date, "June 14, 2025");
}

#[tokio::test]
async fn test_create_event_requires_title_and_date() {
    let mut store = test_store();

    let draft = EventDraft {
        location: "Somewhere".to_string(),
        description: "A ride.".to_string(),
        ..EventDraft::default()
    };

    match store.create_event(draft).await {
        Err(EventsError::Validation { field, .. }) => assert_eq!(field, "title"),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_delete_event_removes_the_record() {
    let mut store = test_store();
    let before = store.len();

    let removed = store.delete_event(2).unwrap();

    assert_eq!(removed.id, 2);
    assert_eq!(store.len(), before - 1);
    assert!(matches!(store.get_event(2), Err(EventsError::NotFound(2))));
}

#[test]
fn test_delete_unknown_event_is_not_found() {
    let mut store = test_store();
    assert!(matches!(
        store.delete_event(42),
        Err(EventsError::NotFound(42))
    ));
}

#[test]
fn test_seeded_catalog_shape() {
    let store = test_store();
    assert_eq!(store.len(), 4);

    // The flagship event carries the full detail payload
    let event = store.get_event(1).unwrap();
    assert_eq!(event.participants, 45);
    assert_eq!(event.max_participants, Some(75));
    assert!(!event.is_fully_booked());
    assert_eq!(event.spots_left(), Some(30));
    assert!(event.requirements.as_ref().is_some_and(|r| !r.is_empty()));
    assert!(event.schedule.as_ref().is_some_and(|s| !s.is_empty()));
    assert_eq!(event.capacity_text(), "45 / 75 registered");
}
