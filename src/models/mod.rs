pub mod event;
pub mod registration;

// Re-export commonly used types
pub use event::{EventRecord, EventStatus, EventType, ScheduleItem};
pub use registration::{EventDraft, RegistrationForm};
