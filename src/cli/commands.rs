//! CLI command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::config::{
    CONFIG_KEYS, ConfigLoader, ConfigValidator, get_config_value, paths, set_config_value,
};

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "companyName", "accentDark")
        key: Option<String>,
    },
    /// Set configuration value (an empty value clears an optional field)
    Set {
        /// Configuration key (e.g., "companyName", "accentDark")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// List configuration keys
    Keys,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Handle configuration subcommands
///
/// `config_path` overrides the default config file location.
pub fn handle_config_command(cmd: ConfigSubcommand, config_path: Option<&Path>) -> Result<()> {
    let path: PathBuf = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(paths::root_config_path);

    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load_from(&path).context("Failed to load configuration")?;

            if let Some(key) = key {
                println!("{}", get_config_value(&config, &key)?);
            } else {
                print_yaml(&config)?;
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Start from the file layer only, so env overrides are not persisted
            let mut config = if path.exists() {
                ConfigLoader::load_overlay(&path)?.apply(ConfigLoader::load_defaults())
            } else {
                ConfigLoader::load_defaults()
            };

            set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            // Never write a file the loader would reject
            ConfigValidator::validate(&config).with_context(|| {
                format!("Refusing to save invalid configuration after setting {}", key)
            })?;

            ConfigLoader::save(&config, &path).context("Failed to save configuration")?;
            println!("Configuration saved to {}", path.display());
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load_from(&path).context("Failed to load configuration")?;
            print_yaml(&config)?;
        }
        ConfigSubcommand::Keys => {
            for key in CONFIG_KEYS {
                println!("{}", key);
            }
        }
        ConfigSubcommand::Path => {
            println!("{}", path.display());
        }
        ConfigSubcommand::Validate => {
            if !path.exists() {
                println!("No configuration file at {}; defaults are valid", path.display());
                return Ok(());
            }
            match ConfigLoader::validate_file(&path) {
                Ok(()) => {
                    println!("Configuration is valid");
                }
                Err(e) => {
                    eprintln!("Configuration validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_yaml(config: &crate::config::AppConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
    print!("{}", yaml);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(path: &Path, key: &str, value: &str) -> Result<()> {
        handle_config_command(
            ConfigSubcommand::Set {
                key: key.to_string(),
                value: value.to_string(),
            },
            Some(path),
        )
    }

    #[test]
    fn test_set_blank_optional_then_reload() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");

        set(&path, "companyName", "Acme").unwrap();
        set(&path, "sandboxId", "sbx-1").unwrap();
        set(&path, "sandboxId", " ").unwrap();

        let config = ConfigLoader::load_from(&path).unwrap();
        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.sandbox_id, None);
        assert!(ConfigLoader::validate_file(&path).is_ok());
    }

    #[test]
    fn test_set_invalid_value_is_not_saved() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");

        assert!(set(&path, "accent", "notacolor").is_err());
        assert!(set(&path, "startButtonText", "  ").is_err());
        assert!(!path.exists());

        set(&path, "companyName", "Acme").unwrap();
        assert!(set(&path, "accentDark", "notacolor").is_err());
        let config = ConfigLoader::load_from(&path).unwrap();
        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.accent_dark.as_deref(), Some("#f43f5e"));
    }

    #[test]
    fn test_set_does_not_persist_env_overrides() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");

        // SAFETY: set_var is unsafe in Rust 2024 due to potential data races.
        // No other test in this crate reads this variable through the environment.
        unsafe {
            std::env::set_var("GAUNTLET_START_BUTTON_TEXT", "From The Environment");
        }

        let result = set(&path, "companyName", "Acme");

        // SAFETY: see set_var above.
        unsafe {
            std::env::remove_var("GAUNTLET_START_BUTTON_TEXT");
        }

        result.unwrap();
        let overlay = ConfigLoader::load_overlay(&path).unwrap();
        assert_eq!(overlay.company_name.as_deref(), Some("Acme"));
        assert_eq!(
            overlay.start_button_text.as_deref(),
            Some("Enter The Gauntlet")
        );
    }

    #[test]
    fn test_validate_missing_file_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.yaml");

        assert!(handle_config_command(ConfigSubcommand::Validate, Some(&path)).is_ok());
        assert!(!path.exists());
    }

    #[test]
    fn test_read_only_commands() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        set(&path, "agentName", "pitch-coach").unwrap();

        for cmd in [
            ConfigSubcommand::Get {
                key: Some("agentName".to_string()),
            },
            ConfigSubcommand::Get { key: None },
            ConfigSubcommand::List,
            ConfigSubcommand::Keys,
            ConfigSubcommand::Path,
            ConfigSubcommand::Validate,
        ] {
            assert!(handle_config_command(cmd, Some(&path)).is_ok());
        }

        assert!(
            handle_config_command(
                ConfigSubcommand::Get {
                    key: Some("readOnly".to_string()),
                },
                Some(&path),
            )
            .is_err()
        );
    }
}
