mod config;
mod play_cmd;
mod policies_cmd;
mod terminal;

#[cfg(test)]
mod test_util;

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sprout_core::{Locale, Species};

use config::{ConfigFile, ConsoleSection, LoggingSection, PacingSection, SproutConfig};

/// Log filter used before any config file has been read.
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "sprout", version, about = "Interactive plant care simulator")]
struct Cli {
    /// Console language: en or ko (overrides SPROUT_LOCALE)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Multiplier for care-action waits, e.g. 0 to skip them (overrides SPROUT_TIME_SCALE)
    #[arg(long, global = true)]
    time_scale: Option<f64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start an interactive care session (default)
    Play,
    /// Show how long each care action takes per species
    Policies {
        /// Only show this species (Cactus, Rose or Tomato)
        #[arg(long)]
        species: Option<Species>,
    },
    /// Write a sprout config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the `sprout init` command: write the config file at `path`.
fn cmd_init(
    path: &Path,
    locale: Option<Locale>,
    time_scale: Option<f64>,
    force: bool,
) -> Result<ConfigFile> {
    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let pacing = match time_scale {
        Some(scale) => {
            config::validate_time_scale(scale)?;
            PacingSection { time_scale: scale }
        }
        None => PacingSection::default(),
    };

    let cfg = ConfigFile {
        console: ConsoleSection {
            locale: locale.unwrap_or_default(),
        },
        pacing,
        logging: LoggingSection::default(),
    };

    config::save_config_to(&cfg, path)?;
    Ok(cfg)
}

fn init_tracing(default_level: &str) -> Result<()> {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config::log_filter(default_level)?,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

/// Resolve configuration and start logging at the configured level.
fn resolve_config(cli_locale: Option<Locale>, cli_time_scale: Option<f64>) -> Result<SproutConfig> {
    let resolved = SproutConfig::resolve(cli_locale, cli_time_scale)?;
    init_tracing(&resolved.log_level)?;
    tracing::debug!(
        locale = %resolved.locale,
        time_scale = resolved.time_scale,
        "configuration resolved"
    );
    Ok(resolved)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Init { force } => {
            init_tracing(DEFAULT_LOG_LEVEL)?;
            let path = config::config_path();
            let cfg = cmd_init(&path, cli.locale, cli.time_scale, force)?;

            println!("Config written to {}", path.display());
            println!("  console.locale = {}", cfg.console.locale);
            println!("  pacing.time_scale = {}", cfg.pacing.time_scale);
            println!("  logging.level = {}", cfg.logging.level);
        }
        Commands::Play => {
            let resolved = resolve_config(cli.locale, cli.time_scale)?;
            play_cmd::run_play(&resolved)?;
        }
        Commands::Policies { species } => {
            let resolved = resolve_config(cli.locale, cli.time_scale)?;
            policies_cmd::run_policies(species, resolved.locale);
        }
    }

    Ok(())
}
