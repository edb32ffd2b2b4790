// modlist-html - Render a Mod Organizer 2 load order as a linked HTML mod list
//
// This is the library crate containing the pipeline, models and configuration.
// The binary crate (main.rs) provides the command-line entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use crate::config::ConfigManager;
pub use crate::models::{EnrichedEntry, Game, InstanceLayout, LoadOrderEntry, ModMetadata, RunConfig};
pub use crate::services::{PipelineError, RunSummary, run};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
