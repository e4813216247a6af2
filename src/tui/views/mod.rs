//! TUI view components
//!
//! Each component is responsible for rendering a specific part of the interface.

mod footer;
mod header;
pub mod helpers;
mod welcome;

pub use footer::*;
pub use header::*;
pub use welcome::*;
