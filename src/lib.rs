//! Library entry for Coursea exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod catalog;
pub mod events;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
