//! Branding resolution
//!
//! Every optional branding field has a fallback. The policy lives here, in one
//! place, so rendering code never has to branch on field presence itself.

use super::schema::AppConfig;
use std::fmt;
use std::str::FromStr;

/// Accent used in light mode when the config carries none
pub const BUILTIN_ACCENT: &str = "#002cf2";

/// Accent used in dark mode when the config carries neither accent
pub const BUILTIN_ACCENT_DARK: &str = "#1fd5f9";

/// Return the first present, non-blank value of `primary`, `fallback`, `builtin`
pub fn resolve<'a>(
    primary: Option<&'a str>,
    fallback: Option<&'a str>,
    builtin: &'a str,
) -> &'a str {
    primary
        .filter(|value| !value.trim().is_empty())
        .or_else(|| fallback.filter(|value| !value.trim().is_empty()))
        .unwrap_or(builtin)
}

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(anyhow::anyhow!(
                "Unknown theme mode '{}', expected 'light' or 'dark'",
                other
            )),
        }
    }
}

/// Sandbox provisioning state derived from `sandboxId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sandbox {
    Disabled,
    Enabled(String),
}

impl Sandbox {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Sandbox::Enabled(_))
    }
}

/// An input affordance the client can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputModality {
    Chat,
    Camera,
    ScreenShare,
}

impl InputModality {
    pub fn label(self) -> &'static str {
        match self {
            InputModality::Chat => "Chat",
            InputModality::Camera => "Camera",
            InputModality::ScreenShare => "Screen share",
        }
    }
}

impl AppConfig {
    /// Accent color for the given mode
    ///
    /// Dark mode prefers `accentDark`, then `accent`, then the built-in dark accent.
    pub fn accent_for(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => resolve(self.accent.as_deref(), None, BUILTIN_ACCENT),
            ThemeMode::Dark => resolve(
                self.accent_dark.as_deref(),
                self.accent.as_deref(),
                BUILTIN_ACCENT_DARK,
            ),
        }
    }

    /// Logo asset for the given mode
    pub fn logo_for(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => &self.logo,
            ThemeMode::Dark => resolve(
                self.logo_dark.as_deref(),
                Some(self.logo.as_str()),
                &self.logo,
            ),
        }
    }

    pub fn sandbox(&self) -> Sandbox {
        match self.sandbox_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Sandbox::Enabled(id.to_string()),
            _ => Sandbox::Disabled,
        }
    }

    pub fn agent_name(&self) -> Option<&str> {
        self.agent_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Enabled input affordances, in display order
    pub fn input_modalities(&self) -> Vec<InputModality> {
        [
            (self.supports_chat_input, InputModality::Chat),
            (self.supports_video_input, InputModality::Camera),
            (self.supports_screen_share, InputModality::ScreenShare),
        ]
        .into_iter()
        .filter_map(|(enabled, modality)| enabled.then_some(modality))
        .collect()
    }
}
