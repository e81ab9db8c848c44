use std::time::Duration;

use crate::catalog::EventStore;
use crate::interactive::app::{
    ConfirmAction, InteractiveApp, NotificationKind, PendingSubmit, Popup, View,
};
use crate::models::EventType;

fn test_app() -> InteractiveApp {
    InteractiveApp::with_store(EventStore::seeded().with_latency(Duration::ZERO))
}

fn fill_registration(app: &mut InteractiveApp) {
    app.register_form.form.name = "Alex Rider".to_string();
    app.register_form.form.email = "alex@example.com".to_string();
    app.register_form.form.phone = "555-0100".to_string();
    app.register_form.form.emergency_contact = "Sam Rider 555-0101".to_string();
}

#[test]
fn test_registration_dialog_opens_for_available_event() {
    let mut app = test_app();
    app.open_detail_for(1);

    app.open_registration();

    assert_eq!(app.popup, Some(Popup::Register));
}

#[test]
fn test_registration_dialog_never_opens_when_fully_booked() {
    let mut app = test_app();
    let mut event = app.store.get_event(1).unwrap().clone();
    event.participants = 75;
    event.max_participants = Some(75);
    app = InteractiveApp::with_store(
        EventStore::with_events(vec![event]).with_latency(Duration::ZERO),
    );
    app.open_detail_for(1);

    app.open_registration();

    assert_eq!(app.popup, None);
    assert!(app
        .notifications
        .iter()
        .any(|n| n.kind == NotificationKind::Info));
}

#[test]
fn test_registration_dialog_always_opens_for_unlimited_event() {
    let mut app = test_app();
    let mut event = app.store.get_event(1).unwrap().clone();
    event.participants = 10_000;
    event.max_participants = None;
    app = InteractiveApp::with_store(
        EventStore::with_events(vec![event]).with_latency(Duration::ZERO),
    );
    app.open_detail_for(1);

    app.open_registration();

    assert_eq!(app.popup, Some(Popup::Register));
}

#[test]
fn test_registration_submit_rejects_invalid_email() {
    let mut app = test_app();
    app.open_detail_for(1);
    app.open_registration();
    fill_registration(&mut app);
    app.register_form.form.email = "nope".to_string();

    app.submit_registration();

    assert!(app.register_form.error.is_some());
    assert!(!app.register_form.submitting);
    assert_eq!(app.pending_submit, None);
}

#[tokio::test]
async fn test_registration_submit_increments_and_closes_dialog() {
    let mut app = test_app();
    app.open_detail_for(1);
    app.open_registration();
    fill_registration(&mut app);
    let attending_before = app.attending.len();

    app.submit_registration();
    assert!(app.register_form.submitting);
    let pending = app.take_pending_submit().unwrap();
    assert_eq!(pending, PendingSubmit::Registration(1));

    app.perform_submit(pending).await;

    assert_eq!(app.popup, None);
    assert_eq!(app.store.get_event(1).unwrap().participants, 46);
    assert_eq!(app.attending.len(), attending_before + 1);
    assert!(app
        .notifications
        .iter()
        .any(|n| n.kind == NotificationKind::Success));
    // The transient form is dropped after a successful submit
    assert!(app.register_form.form.name.is_empty());
}

#[test]
fn test_escape_closes_dialog_without_mutating_catalog() {
    let mut app = test_app();
    app.open_detail_for(1);
    app.open_registration();
    fill_registration(&mut app);

    app.close_registration();

    assert_eq!(app.popup, None);
    assert_eq!(app.store.get_event(1).unwrap().participants, 45);
    assert!(app.register_form.form.name.is_empty());
}

#[test]
fn test_delete_requires_acknowledged_confirmation() {
    let mut app = test_app();
    app.open_dashboard();
    assert_eq!(app.organized.len(), 3);

    // Select the third organized event (id 3) and ask to delete it
    app.dash_move_down();
    app.dash_move_down();
    app.request_delete();

    assert_eq!(
        app.popup,
        Some(Popup::Confirmation(ConfirmAction::DeleteEvent(3)))
    );
    // Nothing has left the list yet
    assert_eq!(app.organized.len(), 3);

    app.confirm_delete(3);

    assert_eq!(app.popup, None);
    assert_eq!(app.organized.len(), 2);
    assert!(app.organized.iter().all(|e| e.id != 3));
}

#[test]
fn test_declining_delete_keeps_the_event() {
    let mut app = test_app();
    app.open_dashboard();
    app.request_delete();
    assert!(matches!(app.popup, Some(Popup::Confirmation(_))));

    // Decline
    app.popup = None;

    assert_eq!(app.organized.len(), 3);
}

#[test]
fn test_cancel_registration_is_immediate() {
    let mut app = test_app();
    app.open_dashboard();
    app.toggle_dash_tab();
    assert_eq!(app.attending.len(), 2);

    app.cancel_registration();

    assert_eq!(app.attending.len(), 1);
    assert!(app.attending.iter().all(|e| e.id != 4));
    assert!(app
        .notifications
        .iter()
        .any(|n| n.kind == NotificationKind::Success));
}

#[tokio::test]
async fn test_creation_submit_disables_then_appends_and_resets() {
    let mut app = test_app();
    app.open_creation();
    app.create_form.title = "Sunset Loop".to_string();
    app.create_form.event_type = EventType::Road;
    app.create_form.date = "2025-08-20".to_string();
    app.create_form.location = "Harbor Road".to_string();
    app.create_form.description = "An easy evening spin.".to_string();
    let catalog_before = app.store.len();

    app.submit_creation();

    // Submit control is disabled while the simulated call runs
    assert!(app.create_form.submitting);
    let pending = app.take_pending_submit().unwrap();
    assert_eq!(pending, PendingSubmit::Creation);

    app.perform_submit(pending).await;

    assert_eq!(app.store.len(), catalog_before + 1);
    assert_eq!(app.popup, None);
    assert!(app.create_form.title.is_empty());
    assert!(!app.create_form.submitting);
    assert!(app
        .notifications
        .iter()
        .any(|n| n.kind == NotificationKind::Success));

    // The new event joins the organizer list too
    assert!(app
        .organized
        .iter()
        .any(|e| e.title == "Sunset Loop"));
}

#[test]
fn test_creation_submit_surfaces_validation_error() {
    let mut app = test_app();
    app.open_creation();
    app.create_form.title = "No Date Ride".to_string();

    app.submit_creation();

    assert!(app.create_form.error.is_some());
    assert!(!app.create_form.submitting);
    assert_eq!(app.pending_submit, None);
}

#[test]
fn test_category_tabs_filter_the_listing() {
    let mut app = test_app();
    assert_eq!(app.filtered_events.len(), 4);

    app.select_tab(1); // Mountain
    assert!(app
        .filtered_events
        .iter()
        .all(|e| e.event_type == EventType::Mountain));

    app.select_tab(0); // back to All
    assert_eq!(app.filtered_events.len(), 4);
}

#[test]
fn test_search_filters_and_clears() {
    let mut app = test_app();
    app.open_search();
    app.search_input = "endurance".to_string();
    app.apply_search();

    assert_eq!(app.filtered_events.len(), 1);
    assert_eq!(app.filtered_events[0].id, 4);

    app.open_search();
    app.search_input.clear();
    app.apply_search();
    assert_eq!(app.filtered_events.len(), 4);
}

#[test]
fn test_unknown_detail_id_raises_error_toast() {
    let mut app = test_app();
    app.open_detail_for(99);

    assert_eq!(app.view, View::Listing);
    assert!(app
        .notifications
        .iter()
        .any(|n| n.kind == NotificationKind::Error));
}
