pub mod config;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod events;
pub mod register;
