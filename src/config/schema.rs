//! Configuration schema definitions
//!
//! Defines the branding and feature-flag record consumed by the client, plus the
//! partial overlay shape used for configuration files.

use serde::{Deserialize, Deserializer, Serialize};

/// Branding and feature-flag configuration
///
/// Required fields have no serde default: a document missing any of them does not
/// deserialize into an `AppConfig`. Optional fields are either present or absent
/// (serialized as `null`), and every consumer defines what absence means (see
/// [`super::branding`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Window/tab title
    pub page_title: String,

    /// Meta description shown under the title
    pub page_description: String,

    /// Brand label shown in the UI
    pub company_name: String,

    /// Text-chat affordance
    pub supports_chat_input: bool,

    /// Camera capture affordance
    pub supports_video_input: bool,

    /// Screen-share affordance
    pub supports_screen_share: bool,

    /// Buffer input captured before the session connects
    pub is_pre_connect_buffer_enabled: bool,

    /// Light-theme logo asset (path or URL)
    pub logo: String,

    /// Label of the call-start control
    pub start_button_text: String,

    /// Light-theme accent color
    #[serde(default)]
    pub accent: Option<String>,

    /// Dark-theme logo asset, falls back to `logo`
    #[serde(default)]
    pub logo_dark: Option<String>,

    /// Dark-theme accent color, falls back to `accent`
    #[serde(default)]
    pub accent_dark: Option<String>,

    /// Sandbox provisioning identifier (absent = sandbox disabled)
    #[serde(default)]
    pub sandbox_id: Option<String>,

    /// Backend agent profile to connect to
    #[serde(default)]
    pub agent_name: Option<String>,
}

/// Partial configuration read from a file
///
/// Every field is optional so a file only needs to carry what it changes. An
/// overlay is only ever applied on top of a complete `AppConfig`, which keeps the
/// required fields populated. For the optional branding fields a missing key keeps
/// the base value while an explicit `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppConfigOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_chat_input: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_video_input: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_screen_share: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pre_connect_buffer_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_button_text: Option<String>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub accent: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_dark: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub accent_dark: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub sandbox_id: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub agent_name: Option<Option<String>>,
}

/// Map a present key (including `null`) to `Some`, leaving missing keys to `default`
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl AppConfigOverlay {
    /// Apply this overlay on top of `base`, replacing only the fields it carries
    pub fn apply(self, base: AppConfig) -> AppConfig {
        AppConfig {
            page_title: self.page_title.unwrap_or(base.page_title),
            page_description: self.page_description.unwrap_or(base.page_description),
            company_name: self.company_name.unwrap_or(base.company_name),
            supports_chat_input: self.supports_chat_input.unwrap_or(base.supports_chat_input),
            supports_video_input: self
                .supports_video_input
                .unwrap_or(base.supports_video_input),
            supports_screen_share: self
                .supports_screen_share
                .unwrap_or(base.supports_screen_share),
            is_pre_connect_buffer_enabled: self
                .is_pre_connect_buffer_enabled
                .unwrap_or(base.is_pre_connect_buffer_enabled),
            logo: self.logo.unwrap_or(base.logo),
            start_button_text: self.start_button_text.unwrap_or(base.start_button_text),
            accent: self.accent.unwrap_or(base.accent),
            logo_dark: self.logo_dark.unwrap_or(base.logo_dark),
            accent_dark: self.accent_dark.unwrap_or(base.accent_dark),
            sandbox_id: self.sandbox_id.unwrap_or(base.sandbox_id),
            agent_name: self.agent_name.unwrap_or(base.agent_name),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        super::defaults::app_config_defaults()
    }
}
