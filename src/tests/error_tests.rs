use crate::error::{ErrorContext, EventsError};
use crate::events_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let events_result = result.context("Failed to read config file");
    assert!(events_result.is_err());

    match events_result {
        Err(EventsError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected EventsError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Organizer not configured");

    assert!(result.is_err());
    match result {
        Err(EventsError::Unknown(msg)) => {
            assert_eq!(msg, "Organizer not configured");
        }
        _ => panic!("Expected EventsError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let events_result =
        result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.txt"));

    assert!(events_result.is_err());
    match events_result {
        Err(EventsError::Unknown(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected EventsError::Unknown"),
    }
}

#[test]
fn test_events_error_macro() {
    let error = events_error!(ConfigError, "Missing home directory");
    match error {
        EventsError::ConfigError(msg) => assert_eq!(msg, "Missing home directory"),
        _ => panic!("Expected EventsError::ConfigError"),
    }

    let error = events_error!(InvalidInput, "Invalid filter: {}", "type:gravel");
    match error {
        EventsError::InvalidInput(msg) => assert_eq!(msg, "Invalid filter: type:gravel"),
        _ => panic!("Expected EventsError::InvalidInput"),
    }
}

#[test]
fn test_user_facing_messages() {
    assert_eq!(
        EventsError::NotFound(7).to_string(),
        "No event found with id 7"
    );
    assert_eq!(
        EventsError::validation("email", "is required").to_string(),
        "email: is required"
    );
    assert_eq!(
        EventsError::CapacityExceeded { id: 1, max: 75 }.to_string(),
        "Event 1 is fully booked (75 participants)"
    );
}
