//! Gauntlet - terminal client for The Gauntlet startup-validator voice agent
//!
//! Shows the branded welcome screen and, once the user starts a call, hands the
//! start request to the session launcher.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gauntlet::cli::{self, ConfigSubcommand};
use gauntlet::config::{ConfigLoader, ThemeMode, paths};
use std::path::PathBuf;

/// Gauntlet - terminal client for The Gauntlet voice agent
#[derive(Parser, Debug)]
#[command(name = "gauntlet")]
#[command(about = "Terminal client for The Gauntlet voice agent", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Theme mode: light or dark
    #[arg(long)]
    theme: Option<String>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Config { subcommand }) => {
            return cli::handle_config_command(subcommand, args.config.as_deref());
        }
        Some(Command::Version) => {
            cli::display_version();
            return Ok(());
        }
        None => {}
    }

    // Initialize logging if debug flag is set
    let log_file = cli::init_logging(args.debug)?;

    // Print log file location to stderr before starting TUI (so it doesn't interfere)
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    let mode = match args.theme.as_deref() {
        Some(theme) => theme.parse::<ThemeMode>()?,
        None => ThemeMode::default(),
    };

    let config_path = args.config.unwrap_or_else(paths::root_config_path);
    let config = ConfigLoader::load_from(&config_path).unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration: {:#}, using defaults", e);
        eprintln!("Warning: {:#}. Using default configuration.", e);
        ConfigLoader::load_defaults()
    });

    tracing::debug!(
        "Configuration loaded: company={}, agent={:?}, sandbox={:?}",
        config.company_name,
        config.agent_name(),
        config.sandbox()
    );

    run(config, mode)
}

#[cfg(feature = "tui")]
fn run(config: gauntlet::AppConfig, mode: ThemeMode) -> Result<()> {
    use anyhow::Context;
    use gauntlet::session::{JsonLineLauncher, SessionLauncher};

    if let Some(request) = gauntlet::tui::run_tui(config, mode)? {
        JsonLineLauncher::stdout()
            .launch(&request)
            .context("Failed to hand off start request")?;
    }
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run(_config: gauntlet::AppConfig, _mode: ThemeMode) -> Result<()> {
    Err(anyhow::anyhow!(
        "gauntlet was built without the 'tui' feature; only the 'config' commands are available"
    ))
}
