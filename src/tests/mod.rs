mod app_tests;
mod context_tests;
mod error_tests;
mod filter_tests;
mod store_tests;
