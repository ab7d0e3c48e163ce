//! Command-line argument parsing and headless query mode.

pub mod definition;
pub mod query;

pub use definition::{Args, determine_log_level, resolve_catalog_source};
pub use query::{QueryError, format_report, handle_query, run_query};
