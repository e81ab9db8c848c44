use crate::catalog::EventStore;
use crate::filtering::{filter_by_type, search, EventFilter};
use crate::models::{EventStatus, EventType};

#[test]
fn test_filter_by_type_is_order_preserving_subsequence() {
    let store = EventStore::seeded();
    let events = store.list_events();

    let mountain = filter_by_type(events, Some(EventType::Mountain));

    let expected: Vec<u32> = events
        .iter()
        .filter(|e| e.event_type == EventType::Mountain)
        .map(|e| e.id)
        .collect();
    let actual: Vec<u32> = mountain.iter().map(|e| e.id).collect();

    assert_eq!(actual, expected);
    assert!(mountain.iter().all(|e| e.event_type == EventType::Mountain));
}

#[test]
fn test_filter_all_tab_is_identity() {
    let store = EventStore::seeded();
    let events = store.list_events();

    let all = filter_by_type(events, None);
    assert_eq!(all.len(), events.len());
    assert_eq!(
        all.iter().map(|e| e.id).collect::<Vec<_>>(),
        events.iter().map(|e| e.id).collect::<Vec<_>>()
    );
}

#[test]
fn test_search_is_case_insensitive_over_title_and_description() {
    let store = EventStore::seeded();
    let events = store.list_events();

    let by_title = search(events, "MOUNTAIN TRAIL");
    assert!(by_title.iter().any(|e| e.id == 1));

    // "rocky sections" only appears in the flagship event's description
    let by_description = search(events, "ROCKY SECTIONS");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].id, 1);

    let none = search(events, "zzz-no-such-event");
    assert!(none.is_empty());
}

#[test]
fn test_empty_filter_matches_everything() {
    let store = EventStore::seeded();
    let filter = EventFilter::new();

    assert!(filter.is_empty());
    assert_eq!(filter.apply(store.list_events()).len(), store.len());
}

#[test]
fn test_filter_criteria_are_conjunctive() {
    let store = EventStore::seeded();
    let filter = EventFilter {
        event_type: Some(EventType::Mountain),
        query: Some("city lights".to_string()),
        status: None,
    };

    // "city lights" matches a road event, so constraining to mountain yields nothing
    assert!(filter.apply(store.list_events()).is_empty());
}

#[test]
fn test_parse_tokens() {
    let filter = EventFilter::parse("type:mountain status:upcoming steep trail").unwrap();
    assert_eq!(filter.event_type, Some(EventType::Mountain));
    assert_eq!(filter.status, Some(EventStatus::Upcoming));
    assert_eq!(filter.query.as_deref(), Some("steep trail"));

    let plain = EventFilter::parse("coastal").unwrap();
    assert_eq!(plain.event_type, None);
    assert_eq!(plain.query.as_deref(), Some("coastal"));

    assert!(EventFilter::parse("type:gravel").is_err());
    assert!(EventFilter::parse("status:someday").is_err());
}

#[test]
fn test_parse_accepts_cross_country_alias() {
    let filter = EventFilter::parse("type:cross-country").unwrap();
    assert_eq!(filter.event_type, Some(EventType::Cross));
}
