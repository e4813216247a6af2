//! Theme and styling definitions
//!
//! The terminal theme is derived from the branding configuration: accent and logo
//! go through the fallback rules in [`crate::config::branding`], everything else
//! comes from the light or dark palette.

use crate::config::branding::{BUILTIN_ACCENT, BUILTIN_ACCENT_DARK};
use crate::config::{AppConfig, ThemeMode};
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,

    // Branding
    pub accent: Color,
    pub logo: String,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,
    pub border: Color,

    // Control colors
    pub button_text: Color,

    // Footer colors
    pub footer_key: Color,
    pub modality_enabled: Color,
    pub modality_disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&AppConfig::default(), ThemeMode::Light)
    }
}

impl Theme {
    /// Build the theme for `mode` from the branding configuration
    pub fn from_config(config: &AppConfig, mode: ThemeMode) -> Self {
        let builtin = match mode {
            ThemeMode::Light => BUILTIN_ACCENT,
            ThemeMode::Dark => BUILTIN_ACCENT_DARK,
        };
        let accent = parse_color(config.accent_for(mode)).unwrap_or_else(|| {
            tracing::warn!(
                "Accent '{}' is not a valid color, using built-in {}",
                config.accent_for(mode),
                builtin
            );
            parse_color(builtin).unwrap_or(Color::Reset)
        });

        let (text_primary, text_muted, border, button_text) = match mode {
            ThemeMode::Light => (Color::Black, Color::DarkGray, Color::Gray, Color::White),
            ThemeMode::Dark => (Color::White, Color::Gray, Color::DarkGray, Color::Black),
        };

        Self {
            mode,
            accent,
            logo: config.logo_for(mode).to_string(),
            text_primary,
            text_muted,
            border,
            button_text,
            footer_key: accent,
            modality_enabled: Color::Green,
            modality_disabled: text_muted,
        }
    }

    // Helper methods for common style combinations

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(self.button_text)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }
}

/// Parse a CSS color string to a ratatui RGB color
///
/// Supports everything csscolorparser does: hex (#fff, #ffffff), named colors,
/// rgb()/hsl() functions. Alpha is dropped.
pub fn parse_color(color_str: &str) -> Option<Color> {
    let color = csscolorparser::parse(color_str.trim()).ok()?;
    let [r, g, b, _] = color.to_rgba8();
    Some(Color::Rgb(r, g, b))
}
