//! Application module
//!
//! This module contains the main TUI application state and logic, organized
//! into sub-modules for better maintainability.

mod core;
mod events;
mod rendering;

pub use core::*;
