mod config;

pub use config::{get_organizer, load_config, save_config, Config};
