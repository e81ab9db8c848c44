use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::constants::CONFIG_FILE;
use crate::error::{EventsError, EventsResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Display name used as the organizer of created events and to label
    /// the dashboard.
    pub organizer: Option<String>,
    /// Default output format for list commands: simple, table, or json.
    pub default_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            organizer: None,
            default_format: None,
        }
    }
}

pub fn load_config() -> Config {
    let Some(home_dir) = dirs::home_dir() else {
        return Config::default();
    };
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        fs::read_to_string(&config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> EventsResult<()> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| EventsError::ConfigError("Could not find home directory".to_string()))?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

/// The current user's display name: environment first, then config file,
/// then a neutral default.
pub fn get_organizer() -> String {
    if let Ok(name) = env::var("BIKEVENTS_ORGANIZER") {
        if !name.trim().is_empty() {
            return name;
        }
    }

    load_config()
        .organizer
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "You".to_string())
}
