//! Header view rendering
//!
//! Shows the page metadata: title on the border, company name and description,
//! then the logo asset and theme mode in effect.

use crate::config::AppConfig;
use crate::tui::theme::Theme;
use crate::tui::views::helpers::create_themed_block;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the header
pub fn render_header(f: &mut Frame, area: Rect, config: &AppConfig, theme: &Theme) {
    let block = create_themed_block(&config.page_title, theme);

    let lines = vec![
        Line::from(vec![
            Span::styled(config.company_name.clone(), theme.accent_style()),
            Span::raw("  "),
            Span::styled(config.page_description.clone(), theme.muted_style()),
        ]),
        Line::from(vec![
            Span::styled("logo: ", theme.muted_style()),
            Span::raw(theme.logo.clone()),
            Span::styled("  mode: ", theme.muted_style()),
            Span::raw(theme.mode.to_string()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
