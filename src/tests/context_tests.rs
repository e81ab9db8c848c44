use std::time::Duration;

use crate::catalog::EventStore;
use crate::cli_context::CliContextBuilder;

#[test]
fn test_builder_overrides_organizer() {
    let context = CliContextBuilder::new()
        .with_organizer("Casey".to_string())
        .build()
        .unwrap();

    assert_eq!(context.organizer(), "Casey");
}

#[test]
fn test_builder_overrides_store() {
    let store = EventStore::seeded().with_latency(Duration::ZERO);
    let expected = store.len();

    let context = CliContextBuilder::new()
        .with_store(store)
        .build()
        .unwrap();

    assert_eq!(context.store().len(), expected);
    assert!(context.store().get_event(1).is_ok());
}

#[test]
fn test_default_context_uses_seeded_catalog() {
    let context = CliContextBuilder::default().build().unwrap();

    assert!(!context.store().is_empty());
    assert!(!context.organizer().is_empty());
}
