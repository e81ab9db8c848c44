use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventsError {
    #[error("No event found with id {0}")]
    NotFound(u32),

    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("Event {id} is fully booked ({max} participants)")]
    CapacityExceeded { id: u32, max: u32 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("State error: {0}")]
    StateError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl EventsError {
    pub fn validation(field: &str, message: &str) -> Self {
        EventsError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

pub type EventsResult<T> = Result<T, EventsError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> EventsResult<T>;
    fn with_context<F>(self, f: F) -> EventsResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> EventsResult<T> {
        self.map_err(|e| EventsError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> EventsResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| EventsError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> EventsResult<T> {
        self.ok_or_else(|| EventsError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> EventsResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| EventsError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! events_error {
    ($error_type:ident, $msg:expr) => {
        EventsError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        EventsError::$error_type(format!($fmt, $($arg)*))
    };
}
