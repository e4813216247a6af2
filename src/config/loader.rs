//! Configuration loading and merging logic
//!
//! Handles loading configuration from multiple sources and merging them
//! according to precedence rules.

use super::{
    defaults, paths,
    schema::{AppConfig, AppConfigOverlay},
    validator::ConfigValidator,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Environment variables that override file and default values
///
/// An empty value clears the optional field it targets. Accent values that do
/// not parse as colors are ignored.
pub const ENV_OVERRIDES: &[&str] = &[
    "GAUNTLET_AGENT_NAME",
    "GAUNTLET_SANDBOX_ID",
    "GAUNTLET_ACCENT",
    "GAUNTLET_ACCENT_DARK",
    "GAUNTLET_START_BUTTON_TEXT",
];

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<AppConfig> {
        Self::load_from(&paths::root_config_path())
    }

    /// Load configuration using `path` as the config file layer
    ///
    /// A missing file is not an error: the defaults stand in for it.
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        let mut config = Self::load_defaults();

        if path.exists() {
            let overlay = Self::load_overlay(path)?;
            config = overlay.apply(config);
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
        }

        config = Self::apply_env_overrides(config);

        ConfigValidator::validate(&config)
            .with_context(|| format!("Invalid configuration from {}", path.display()))?;

        Ok(config)
    }

    /// Load a partial configuration from a file
    pub fn load_overlay(path: &Path) -> Result<AppConfigOverlay> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // An empty file is an empty overlay
        if contents.trim().is_empty() {
            return Ok(AppConfigOverlay::default());
        }

        let overlay: AppConfigOverlay = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!("Loaded config overlay from {}", path.display());
        Ok(overlay)
    }

    /// Validate a config file strictly
    ///
    /// Fails on:
    /// - Invalid YAML syntax
    /// - Unknown configuration keys
    /// - Invalid value types
    /// - Blank required values and unparsable colors after merging
    pub fn validate_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let overlay = Self::load_overlay(path)?;
        let config = overlay.apply(Self::load_defaults());
        ConfigValidator::validate(&config)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> AppConfig {
        defaults::app_config_defaults()
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(config: AppConfig) -> AppConfig {
        Self::apply_overrides_with(config, |key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to read each variable in [`ENV_OVERRIDES`]
    pub fn apply_overrides_with<F>(mut config: AppConfig, lookup: F) -> AppConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        fn optional(value: String) -> Option<String> {
            if value.trim().is_empty() {
                None
            } else {
                Some(value)
            }
        }

        // Unparsable colors are skipped so the file layer survives
        fn color(
            var: &str,
            field: &'static str,
            value: String,
            current: Option<String>,
        ) -> Option<String> {
            match optional(value) {
                Some(value) if ConfigValidator::validate_color(field, &value).is_err() => {
                    tracing::warn!("Ignoring {}: '{}' is not a valid color", var, value);
                    current
                }
                other => other,
            }
        }

        if let Some(agent) = lookup("GAUNTLET_AGENT_NAME") {
            config.agent_name = optional(agent);
        }

        if let Some(sandbox) = lookup("GAUNTLET_SANDBOX_ID") {
            config.sandbox_id = optional(sandbox);
        }

        if let Some(accent) = lookup("GAUNTLET_ACCENT") {
            config.accent = color("GAUNTLET_ACCENT", "accent", accent, config.accent);
        }

        if let Some(accent_dark) = lookup("GAUNTLET_ACCENT_DARK") {
            config.accent_dark = color(
                "GAUNTLET_ACCENT_DARK",
                "accentDark",
                accent_dark,
                config.accent_dark,
            );
        }

        // Required field: blank values are ignored rather than clearing it
        if let Some(text) = lookup("GAUNTLET_START_BUTTON_TEXT") {
            if !text.trim().is_empty() {
                config.start_button_text = text;
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &AppConfig, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &AppConfig) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
