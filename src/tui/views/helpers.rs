//! Common helper functions for view rendering
//!
//! This module provides reusable functions to reduce duplication across views.

use crate::tui::theme::Theme;
use ratatui::{
    text::Span,
    widgets::{Block, Borders},
};

/// Create a block with title and borders using theme
///
/// Reduces boilerplate when creating blocks in views.
pub fn create_themed_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border_style())
}

/// Turn `(key, label)` pairs into footer spans: `<key> label  <key> label`
pub fn key_hint_spans<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(format!("<{}> ", key), theme.footer_key_style()));
        spans.push(Span::raw(format!("{}  ", label)));
    }
    spans
}
