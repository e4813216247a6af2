//! Default configuration values
//!
//! Provides the canonical configuration instance. It is built on demand and handed
//! to consumers by value; nothing here is a process-wide singleton.

use super::schema::AppConfig;

/// Get the default configuration
pub fn app_config_defaults() -> AppConfig {
    AppConfig {
        company_name: "The Gauntlet".to_string(),
        page_title: "The Gauntlet: Startup Validator".to_string(),
        page_description:
            "Pitch your startup to The Partner. Survive 3 rounds of brutal validation."
                .to_string(),

        supports_chat_input: true,
        supports_video_input: false,
        supports_screen_share: false,
        is_pre_connect_buffer_enabled: true,

        logo: "/lk-logo.svg".to_string(),
        accent: Some("#e11d48".to_string()),
        logo_dark: Some("/lk-logo-dark.svg".to_string()),
        accent_dark: Some("#f43f5e".to_string()),
        start_button_text: "Enter The Gauntlet".to_string(),

        sandbox_id: None,
        agent_name: Some("startup-validator".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = app_config_defaults();
        assert_eq!(config.company_name, "The Gauntlet");
        assert_eq!(config.start_button_text, "Enter The Gauntlet");
        assert_eq!(config.agent_name.as_deref(), Some("startup-validator"));
        assert!(config.sandbox_id.is_none());
    }

    #[test]
    fn test_default_capability_flags() {
        let config = app_config_defaults();
        assert_eq!(
            (
                config.supports_chat_input,
                config.supports_video_input,
                config.supports_screen_share,
                config.is_pre_connect_buffer_enabled,
            ),
            (true, false, false, true)
        );
    }

    #[test]
    fn test_required_text_fields_non_empty() {
        let config = app_config_defaults();
        for value in [
            &config.page_title,
            &config.page_description,
            &config.company_name,
            &config.logo,
            &config.start_button_text,
        ] {
            assert!(!value.trim().is_empty());
        }
    }

    #[test]
    fn test_defaults_are_independent_values() {
        let mut tenant = app_config_defaults();
        tenant.company_name = "Acme".to_string();
        assert_eq!(app_config_defaults().company_name, "The Gauntlet");
    }
}
