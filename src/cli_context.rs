use crate::catalog::EventStore;
use crate::config::{get_organizer, load_config};
use crate::error::EventsResult;

/// Central context for CLI operations, holding the loaded configuration and
/// the event catalog the commands operate on.
pub struct CliContext {
    organizer: String,
    default_format: Option<String>,
    store: EventStore,
}

impl CliContext {
    /// Load context from saved configuration with the seeded catalog.
    pub fn load() -> EventsResult<Self> {
        let config = load_config();
        Ok(Self {
            organizer: get_organizer(),
            default_format: config.default_format,
            store: EventStore::seeded(),
        })
    }

    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    /// Output format to use when the command line does not name one.
    pub fn default_format(&self) -> &str {
        self.default_format.as_deref().unwrap_or("simple")
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EventStore {
        &mut self.store
    }
}

/// Builder for contexts with specific configurations, mainly for tests.
pub struct CliContextBuilder {
    organizer: Option<String>,
    store: Option<EventStore>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            organizer: None,
            store: None,
        }
    }

    pub fn with_organizer(mut self, name: String) -> Self {
        self.organizer = Some(name);
        self
    }

    pub fn with_store(mut self, store: EventStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> EventsResult<CliContext> {
        let mut context = CliContext::load()?;
        if let Some(name) = self.organizer {
            context.organizer = name;
        }
        if let Some(store) = self.store {
            context.store = store;
        }
        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
