//! Welcome screen rendering

use crate::tui::constants::{POWERED_BY, WELCOME_EMBLEM, WELCOME_TAGLINE};
use crate::tui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Welcome element: a start-call control with a label and a trigger
///
/// The view only knows its label and what to call when activated; it has no idea
/// what starting a call means.
pub struct WelcomeView<F>
where
    F: FnMut(),
{
    start_button_text: String,
    on_start_call: F,
}

impl<F> WelcomeView<F>
where
    F: FnMut(),
{
    pub fn new(start_button_text: impl Into<String>, on_start_call: F) -> Self {
        Self {
            start_button_text: start_button_text.into(),
            on_start_call,
        }
    }

    /// Visible label of the start control
    pub fn start_button_text(&self) -> &str {
        &self.start_button_text
    }

    /// Invoke the start-call trigger once
    pub fn activate(&mut self) {
        tracing::debug!("Start control activated: {}", self.start_button_text);
        (self.on_start_call)();
    }

    /// Activate on Enter or Space. Returns whether the key activated the control.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, company_name: &str, theme: &Theme) {
        render_welcome(f, area, &self.start_button_text, company_name, theme);
    }
}

/// Render the welcome panel: emblem, heading, tagline, start control, attribution
pub fn render_welcome(
    f: &mut Frame,
    area: Rect,
    start_button_text: &str,
    company_name: &str,
    theme: &Theme,
) {
    let [body, attribution] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let mut lines: Vec<Line> = WELCOME_EMBLEM
        .iter()
        .map(|row| Line::from(Span::styled(*row, theme.accent_style())))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        company_name.to_string(),
        theme.heading_style(),
    )));
    lines.push(Line::from(Span::styled(WELCOME_TAGLINE, theme.muted_style())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}  ", start_button_text),
        theme.button_style(),
    )));

    // Center the block vertically
    let padding = (body.height as usize).saturating_sub(lines.len()) / 2;
    let mut padded = vec![Line::from(""); padding];
    padded.extend(lines);

    let paragraph = Paragraph::new(padded).alignment(Alignment::Center);
    f.render_widget(paragraph, body);

    let footer = Paragraph::new(Line::from(Span::styled(POWERED_BY, theme.muted_style())))
        .alignment(Alignment::Center);
    f.render_widget(footer, attribution);
}
