pub const CONFIG_FILE: &str = ".bikevents-config.json";

/// Delay applied to simulated create/register submissions, matching the
/// original mock API latency.
pub const SIMULATED_LATENCY_MS: u64 = 1500;

/// Image reference attached to newly created events.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=800";

/// Difficulty choices offered by the creation form.
pub const DIFFICULTY_LEVELS: [&str; 4] = ["Beginner", "Intermediate", "Advanced", "Expert"];
