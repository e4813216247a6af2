//! Configuration validation
//!
//! Rejects edited configurations that would leave a required field blank or carry
//! a present-but-unusable optional value.

use super::schema::AppConfig;

/// Validation errors for an edited configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required field '{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("Optional field '{0}' is set but empty; remove it to use the fallback")]
    EmptyOptional(&'static str),

    #[error("Field '{field}' has invalid color '{value}'")]
    InvalidColor { field: &'static str, value: String },
}

/// Result type for validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a full configuration
    pub fn validate(config: &AppConfig) -> ConfigResult<()> {
        Self::require_text("pageTitle", &config.page_title)?;
        Self::require_text("pageDescription", &config.page_description)?;
        Self::require_text("companyName", &config.company_name)?;
        Self::require_text("logo", &config.logo)?;
        Self::require_text("startButtonText", &config.start_button_text)?;

        Self::optional_text("logoDark", &config.logo_dark)?;
        Self::optional_text("sandboxId", &config.sandbox_id)?;
        Self::optional_text("agentName", &config.agent_name)?;

        Self::optional_color("accent", &config.accent)?;
        Self::optional_color("accentDark", &config.accent_dark)?;
        Ok(())
    }

    fn require_text(field: &'static str, value: &str) -> ConfigResult<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::EmptyField(field));
        }
        Ok(())
    }

    fn optional_text(field: &'static str, value: &Option<String>) -> ConfigResult<()> {
        match value {
            Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyOptional(field)),
            _ => Ok(()),
        }
    }

    fn optional_color(field: &'static str, value: &Option<String>) -> ConfigResult<()> {
        Self::optional_text(field, value)?;
        if let Some(color) = value {
            Self::validate_color(field, color)?;
        }
        Ok(())
    }

    /// Check that `value` is a CSS color (hex, named, rgb(), hsl(), ...)
    pub fn validate_color(field: &'static str, value: &str) -> ConfigResult<()> {
        csscolorparser::parse(value.trim())
            .map(|_| ())
            .map_err(|_| ConfigError::InvalidColor {
                field,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(ConfigValidator::validate(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_blank_required_field() {
        let config = AppConfig {
            start_button_text: "   ".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            ConfigValidator::validate(&config),
            Err(ConfigError::EmptyField("startButtonText"))
        );
    }

    #[test]
    fn test_blank_optional_field() {
        let config = AppConfig {
            sandbox_id: Some(String::new()),
            ..AppConfig::default()
        };
        assert_eq!(
            ConfigValidator::validate(&config),
            Err(ConfigError::EmptyOptional("sandboxId"))
        );
    }

    #[test]
    fn test_invalid_accent() {
        let config = AppConfig {
            accent_dark: Some("not-a-color".to_string()),
            ..AppConfig::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidColor {
                field: "accentDark",
                value: "not-a-color".to_string()
            }
        );
        assert!(err.to_string().contains("accentDark"));
    }

    #[test]
    fn test_named_and_short_hex_colors_accepted() {
        assert!(ConfigValidator::validate_color("accent", "crimson").is_ok());
        assert!(ConfigValidator::validate_color("accent", "#f00").is_ok());
        assert!(ConfigValidator::validate_color("accent", "rgb(225, 29, 72)").is_ok());
    }

    #[test]
    fn test_absent_optionals_are_valid() {
        let config = AppConfig {
            accent: None,
            accent_dark: None,
            logo_dark: None,
            agent_name: None,
            ..AppConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
