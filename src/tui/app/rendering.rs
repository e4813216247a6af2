//! Rendering logic for the application

use super::core::App;
use crate::tui::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::tui::views::{render_footer, render_header};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

impl App<'_> {
    /// Main render entry point
    ///
    /// Header (page metadata), welcome panel, footer (key hints and inputs).
    pub fn render(&self, f: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(f.area());

        render_header(f, header, &self.config, &self.theme);
        self.welcome
            .render(f, body, &self.config.company_name, &self.theme);
        render_footer(f, footer, &self.config, &self.theme);
    }
}
