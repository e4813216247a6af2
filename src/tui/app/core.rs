//! Application state

use crate::config::{AppConfig, ThemeMode};
use crate::tui::Theme;
use crate::tui::views::WelcomeView;

/// Trigger invoked when the start control is activated
pub type StartCallFn<'a> = Box<dyn FnMut() + 'a>;

/// Main application state
///
/// The configuration is handed in by the caller and never modified here.
pub struct App<'a> {
    pub(crate) config: AppConfig,
    pub(crate) mode: ThemeMode,
    pub(crate) theme: Theme,
    pub(crate) welcome: WelcomeView<StartCallFn<'a>>,
    pub(crate) started: bool,
}

impl<'a> App<'a> {
    pub fn new(config: AppConfig, mode: ThemeMode, on_start_call: impl FnMut() + 'a) -> Self {
        let theme = Theme::from_config(&config, mode);
        let welcome = WelcomeView::new(
            config.start_button_text.clone(),
            Box::new(on_start_call) as StartCallFn<'a>,
        );

        tracing::debug!(
            "App created: company={}, mode={}, accent={:?}",
            config.company_name,
            mode,
            theme.accent
        );

        Self {
            config,
            mode,
            theme,
            welcome,
            started: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether the start control has been activated
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Switch between light and dark, re-resolving accent and logo
    pub fn toggle_theme(&mut self) {
        self.mode = self.mode.toggle();
        self.theme = Theme::from_config(&self.config, self.mode);
        tracing::debug!("Theme mode switched to {}", self.mode);
    }
}
