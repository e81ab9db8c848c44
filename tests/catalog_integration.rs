use std::time::Duration;

use bikevents::catalog::EventStore;
use bikevents::filtering::EventFilter;
use bikevents::models::{EventDraft, EventType, RegistrationForm};
use bikevents::EventsError;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        name: "Jordan Vale".to_string(),
        email: "jordan@example.com".to_string(),
        phone: "555-0199".to_string(),
        emergency_contact: "Casey Vale 555-0198".to_string(),
    }
}

#[tokio::test]
async fn test_full_event_lifecycle() {
    let mut store = EventStore::seeded().with_latency(Duration::ZERO);

    // Create
    let draft = EventDraft {
        title: "Coastal Classic".to_string(),
        event_type: EventType::Road,
        date: chrono::NaiveDate::from_ymd_opt(2025, 9, 5),
        start_time: "7:30 AM".to_string(),
        end_time: "2:00 PM".to_string(),
        location: "Seaside Promenade".to_string(),
        description: "A rolling coastal route with ocean views.".to_string(),
        max_participants: Some(2),
        ..EventDraft::default()
    };
    let id = store.create_event(draft).await.unwrap();

    let created = store.get_event(id).unwrap();
    assert_eq!(created.date, "September 5, 2025");
    assert_eq!(created.time.as_deref(), Some("7:30 AM - 2:00 PM"));
    assert_eq!(created.capacity_text(), "0 / 2 registered");

    // Register up to capacity
    store.register(id, &valid_form()).await.unwrap();
    store.register(id, &valid_form()).await.unwrap();
    assert!(store.get_event(id).unwrap().is_fully_booked());

    // The third registration is turned away
    assert!(matches!(
        store.register(id, &valid_form()).await,
        Err(EventsError::CapacityExceeded { .. })
    ));

    // Delete
    let removed = store.delete_event(id).unwrap();
    assert_eq!(removed.title, "Coastal Classic");
    assert!(matches!(store.get_event(id), Err(EventsError::NotFound(_))));
}

#[tokio::test]
async fn test_created_events_are_filterable() {
    let mut store = EventStore::seeded().with_latency(Duration::ZERO);

    let draft = EventDraft {
        title: "Night Gravel Grinder".to_string(),
        event_type: EventType::Endurance,
        date: chrono::NaiveDate::from_ymd_opt(2025, 10, 3),
        location: "Old Mill Road".to_string(),
        description: "Lights required for this after-dark gravel session.".to_string(),
        ..EventDraft::default()
    };
    store.create_event(draft).await.unwrap();

    let filter = EventFilter::parse("type:endurance gravel").unwrap();
    let matches = filter.apply(store.list_events());

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Night Gravel Grinder");
}

#[test]
fn test_event_json_uses_original_field_names() {
    let store = EventStore::seeded();
    let event = store.get_event(1).unwrap();

    let json = serde_json::to_value(event).unwrap();
    assert_eq!(json["type"], "mountain");
    assert_eq!(json["maxParticipants"], 75);
    assert_eq!(json["status"], "upcoming");
    assert_eq!(json["participants"], 45);
    assert!(json.get("max_participants").is_none());
}

#[test]
fn test_registration_form_field_by_field_validation() {
    let mut form = valid_form();
    form.name.clear();
    match form.validate() {
        Err(EventsError::Validation { field, .. }) => assert_eq!(field, "name"),
        other => panic!("Expected name validation error, got {:?}", other),
    }

    let mut form = valid_form();
    form.email = "jordan-at-example.com".to_string();
    match form.validate() {
        Err(EventsError::Validation { field, .. }) => assert_eq!(field, "email"),
        other => panic!("Expected email validation error, got {:?}", other),
    }

    let mut form = valid_form();
    form.emergency_contact = "   ".to_string();
    match form.validate() {
        Err(EventsError::Validation { field, .. }) => assert_eq!(field, "emergency contact"),
        other => panic!("Expected emergency contact error, got {:?}", other),
    }

    assert!(valid_form().validate().is_ok());
}
