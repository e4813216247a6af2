//! Gauntlet client library
//!
//! Branding and feature-flag configuration for The Gauntlet voice agent client,
//! the terminal welcome screen that consumes it, and the hand-off of a start
//! request to whatever provisions the session.

pub mod cli;
pub mod config;
pub mod session;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ThemeMode, app_config_defaults, resolve};
pub use session::{SessionLauncher, StartCall};
