pub mod dashboard;
pub mod detail;
pub mod header;
pub mod listing;
