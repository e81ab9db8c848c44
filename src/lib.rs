// Module declarations
pub mod catalog;
pub mod cli_context;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use catalog::EventStore;
pub use config::{get_organizer, load_config, save_config, Config};
pub use error::{EventsError, EventsResult};
pub use models::*;
