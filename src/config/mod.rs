//! Configuration system for gauntlet
//!
//! This module defines the branding/feature-flag contract of the client, its
//! canonical defaults, fallback resolution for optional fields, and the layered
//! loader used when the configuration is edited on disk.

pub mod branding;
mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;
pub mod validator;

pub use branding::{InputModality, Sandbox, ThemeMode, resolve};
pub use defaults::app_config_defaults;
pub use loader::ConfigLoader;
pub use schema::{AppConfig, AppConfigOverlay};
pub use validator::{ConfigError, ConfigValidator};

/// All configuration keys, in schema order
pub const CONFIG_KEYS: &[&str] = &[
    "pageTitle",
    "pageDescription",
    "companyName",
    "supportsChatInput",
    "supportsVideoInput",
    "supportsScreenShare",
    "isPreConnectBufferEnabled",
    "logo",
    "startButtonText",
    "accent",
    "logoDark",
    "accentDark",
    "sandboxId",
    "agentName",
];

/// Get a configuration value by key
///
/// Absent optional fields read as the empty string.
pub fn get_config_value(config: &AppConfig, key: &str) -> anyhow::Result<String> {
    match key {
        "pageTitle" => Ok(config.page_title.clone()),
        "pageDescription" => Ok(config.page_description.clone()),
        "companyName" => Ok(config.company_name.clone()),
        "supportsChatInput" => Ok(config.supports_chat_input.to_string()),
        "supportsVideoInput" => Ok(config.supports_video_input.to_string()),
        "supportsScreenShare" => Ok(config.supports_screen_share.to_string()),
        "isPreConnectBufferEnabled" => Ok(config.is_pre_connect_buffer_enabled.to_string()),
        "logo" => Ok(config.logo.clone()),
        "startButtonText" => Ok(config.start_button_text.clone()),
        "accent" => Ok(config.accent.clone().unwrap_or_default()),
        "logoDark" => Ok(config.logo_dark.clone().unwrap_or_default()),
        "accentDark" => Ok(config.accent_dark.clone().unwrap_or_default()),
        "sandboxId" => Ok(config.sandbox_id.clone().unwrap_or_default()),
        "agentName" => Ok(config.agent_name.clone().unwrap_or_default()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key
///
/// An empty or blank value clears an optional field. Required text fields reject empty
/// values and color fields must parse as CSS colors.
pub fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;

    fn required(key: &'static str, value: &str) -> anyhow::Result<String> {
        if value.trim().is_empty() {
            return Err(ConfigError::EmptyField(key).into());
        }
        Ok(value.to_string())
    }

    fn optional(value: &str) -> Option<String> {
        if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn color(key: &'static str, value: &str) -> anyhow::Result<Option<String>> {
        if !value.trim().is_empty() {
            ConfigValidator::validate_color(key, value)?;
        }
        Ok(optional(value))
    }

    match key {
        "pageTitle" => config.page_title = required("pageTitle", value)?,
        "pageDescription" => config.page_description = required("pageDescription", value)?,
        "companyName" => config.company_name = required("companyName", value)?,
        "supportsChatInput" => {
            config.supports_chat_input = value
                .parse()
                .context("supportsChatInput must be 'true' or 'false'")?;
        }
        "supportsVideoInput" => {
            config.supports_video_input = value
                .parse()
                .context("supportsVideoInput must be 'true' or 'false'")?;
        }
        "supportsScreenShare" => {
            config.supports_screen_share = value
                .parse()
                .context("supportsScreenShare must be 'true' or 'false'")?;
        }
        "isPreConnectBufferEnabled" => {
            config.is_pre_connect_buffer_enabled = value
                .parse()
                .context("isPreConnectBufferEnabled must be 'true' or 'false'")?;
        }
        "logo" => config.logo = required("logo", value)?,
        "startButtonText" => config.start_button_text = required("startButtonText", value)?,
        "accent" => config.accent = color("accent", value)?,
        "logoDark" => config.logo_dark = optional(value),
        "accentDark" => config.accent_dark = color("accentDark", value)?,
        "sandboxId" => config.sandbox_id = optional(value),
        "agentName" => config.agent_name = optional(value),
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}
