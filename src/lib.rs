//! gw2link - inspect and edit Guild Wars 2 chat links in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod chatlink;
pub mod cli;
pub mod component;
pub mod config;
pub mod error;
pub mod icons;
pub mod logging;
pub mod metadata;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
