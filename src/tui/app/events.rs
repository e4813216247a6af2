//! Event handling for the application

use super::core::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

impl App<'_> {
    /// Main keyboard event handler
    ///
    /// Returns Some(true) to quit, Some(false) to continue with special action,
    /// None for normal continuation
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(true);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(true),
            KeyCode::Char('t') => {
                self.toggle_theme();
                Some(false)
            }
            _ => {
                if self.welcome.handle_key(key) {
                    // The session takes over from here
                    self.started = true;
                    Some(true)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{AppConfig, ThemeMode};
    use crate::session::{MockSessionLauncher, SessionLauncher, StartCall};
    use crate::tui::App;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::Cell;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_starts_call_and_quits() {
        let calls = Cell::new(0);
        let mut app = App::new(AppConfig::default(), ThemeMode::Light, || {
            calls.set(calls.get() + 1)
        });

        assert_eq!(app.handle_key(press(KeyCode::Enter)), Some(true));
        assert!(app.has_started());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_quit_does_not_start_call() {
        let calls = Cell::new(0);
        let mut app = App::new(AppConfig::default(), ThemeMode::Light, || {
            calls.set(calls.get() + 1)
        });

        assert_eq!(app.handle_key(press(KeyCode::Char('q'))), Some(true));
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(true)
        );
        assert_eq!(app.handle_key(press(KeyCode::Esc)), Some(true));
        assert!(!app.has_started());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_toggle_theme_re_resolves_branding() {
        let mut app = App::new(AppConfig::default(), ThemeMode::Light, || {});
        assert_eq!(app.theme().logo, "/lk-logo.svg");

        assert_eq!(app.handle_key(press(KeyCode::Char('t'))), Some(false));
        assert_eq!(app.mode(), ThemeMode::Dark);
        assert_eq!(app.theme().logo, "/lk-logo-dark.svg");

        app.handle_key(press(KeyCode::Char('t')));
        assert_eq!(app.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut app = App::new(AppConfig::default(), ThemeMode::Light, || {});
        assert_eq!(app.handle_key(press(KeyCode::Char('x'))), None);
        assert!(!app.has_started());
    }

    #[test]
    fn test_start_hands_request_to_launcher_once() {
        let config = AppConfig {
            sandbox_id: Some("sbx-7".to_string()),
            ..AppConfig::default()
        };
        let request = StartCall::from_config(&config);
        let expected = request.clone();

        let mut launcher = MockSessionLauncher::new();
        launcher
            .expect_launch()
            .withf(move |r| *r == expected)
            .times(1)
            .returning(|_| Ok(()));

        {
            let mut app = App::new(config, ThemeMode::Dark, || {
                launcher.launch(&request).unwrap();
            });
            assert_eq!(app.handle_key(press(KeyCode::Char(' '))), Some(true));
        }
        launcher.checkpoint();
    }
}
