//! Constants used throughout the TUI module
//!
//! This module centralizes magic numbers and strings to reduce duplication
//! and make values easier to maintain.

/// Tagline shown under the welcome heading
pub const WELCOME_TAGLINE: &str = "Pitch your startup idea. Survive the validation.";

/// Attribution line pinned to the bottom of the welcome screen
pub const POWERED_BY: &str = "Powered by LiveKit, Deepgram, Google Gemini, and Murf AI.";

/// Concentric-ring emblem (every row padded to the same width so centering lines up)
pub const WELCOME_EMBLEM: &[&str] = &[
    r"  .-----.  ",
    r" / .---. \ ",
    r"| ( (o) ) |",
    r" \ '---' / ",
    r"  '-----'  ",
];

/// Header height (borders + metadata lines)
pub const HEADER_HEIGHT: u16 = 4;

/// Footer height (borders + key hints + status line)
pub const FOOTER_HEIGHT: u16 = 4;

/// Input poll interval in milliseconds
pub const EVENT_POLL_MS: u64 = 100;
