pub mod events;
pub mod utils;

pub use events::{format_status_color, get_type_icon, print_dashboard, print_events, print_single_event};
pub use utils::{capacity_color, clean_description, truncate};
