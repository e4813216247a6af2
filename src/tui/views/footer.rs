//! Footer view rendering

use crate::config::{AppConfig, InputModality, Sandbox};
use crate::tui::theme::Theme;
use crate::tui::views::helpers::{create_themed_block, key_hint_spans};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Key hints shown in the footer
pub const FOOTER_KEY_HINTS: &[(&str, &str)] = &[
    ("Enter", "Start call"),
    ("t", "Toggle theme"),
    ("q", "Quit"),
];

/// Render the footer: key hints, then enabled inputs and session target
pub fn render_footer(f: &mut Frame, area: Rect, config: &AppConfig, theme: &Theme) {
    let block = create_themed_block("", theme);

    let mut status: Vec<Span> = vec![Span::styled("Inputs: ", theme.muted_style())];
    let enabled = config.input_modalities();
    for modality in [
        InputModality::Chat,
        InputModality::Camera,
        InputModality::ScreenShare,
    ] {
        let (mark, color) = if enabled.contains(&modality) {
            ("✓", theme.modality_enabled)
        } else {
            ("✗", theme.modality_disabled)
        };
        status.push(Span::raw(format!("{} ", modality.label())));
        status.push(Span::styled(format!("{}  ", mark), Style::default().fg(color)));
    }

    status.push(Span::styled("Agent: ", theme.muted_style()));
    status.push(Span::raw(config.agent_name().unwrap_or("-").to_string()));
    status.push(Span::styled("  Sandbox: ", theme.muted_style()));
    status.push(Span::raw(match config.sandbox() {
        Sandbox::Enabled(id) => id,
        Sandbox::Disabled => "off".to_string(),
    }));

    let lines = vec![
        Line::from(key_hint_spans(FOOTER_KEY_HINTS, theme)),
        Line::from(status),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
