//! Configuration file management for sprout.
//!
//! Provides a TOML-based config file at `~/.config/sprout/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use sprout_core::Locale;

/// Env var overriding the console locale (`en` or `ko`).
pub const LOCALE_ENV: &str = "SPROUT_LOCALE";
/// Env var overriding the pacing time scale.
pub const TIME_SCALE_ENV: &str = "SPROUT_TIME_SCALE";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub console: ConsoleSection,
    pub pacing: PacingSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSection {
    pub locale: Locale,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingSection {
    /// Multiplier applied to real sleeps. `1.0` waits the full duration,
    /// `0.0` skips waiting.
    pub time_scale: f64,
}

impl Default for PacingSection {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the sprout config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/sprout` or `~/.config/sprout`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("sprout");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("sprout")
}

/// Return the path to the sprout config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Load the config file if it exists.
///
/// A missing file is not an error; a file that exists but cannot be read
/// or parsed is.
pub fn load_config() -> Result<Option<ConfigFile>> {
    let path = config_path();
    if !path.exists() {
        return Ok(None);
    }
    load_config_from(&path).map(Some)
}

/// Serialize and write the config file to `path`, creating parent dirs as
/// needed.
pub fn save_config_to(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone, PartialEq)]
pub struct SproutConfig {
    pub locale: Locale,
    pub time_scale: f64,
    pub log_level: String,
}

impl SproutConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Locale: `cli_locale` > `SPROUT_LOCALE` > `console.locale` > `en`
    /// - Time scale: `cli_time_scale` > `SPROUT_TIME_SCALE` > `pacing.time_scale` > `1.0`
    /// - Log level: `logging.level` > `warn` (`RUST_LOG` is honoured at subscriber init)
    pub fn resolve(cli_locale: Option<Locale>, cli_time_scale: Option<f64>) -> Result<Self> {
        let file_config = load_config()?;
        Self::resolve_with(file_config, cli_locale, cli_time_scale)
    }

    /// Resolve against an already-loaded config file.
    pub fn resolve_with(
        file_config: Option<ConfigFile>,
        cli_locale: Option<Locale>,
        cli_time_scale: Option<f64>,
    ) -> Result<Self> {
        let file_config = file_config.unwrap_or_default();

        let locale = if let Some(locale) = cli_locale {
            locale
        } else if let Ok(code) = std::env::var(LOCALE_ENV) {
            code.parse::<Locale>()
                .with_context(|| format!("{LOCALE_ENV} env var is not a valid locale"))?
        } else {
            file_config.console.locale
        };

        let time_scale = if let Some(scale) = cli_time_scale {
            scale
        } else if let Ok(raw) = std::env::var(TIME_SCALE_ENV) {
            raw.parse::<f64>()
                .with_context(|| format!("{TIME_SCALE_ENV} env var is not a number: {raw:?}"))?
        } else {
            file_config.pacing.time_scale
        };
        validate_time_scale(time_scale)?;
        log_filter(&file_config.logging.level)?;

        Ok(Self {
            locale,
            time_scale,
            log_level: file_config.logging.level,
        })
    }
}

pub fn validate_time_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() || scale < 0.0 {
        bail!("time scale must be a finite, non-negative number (got {scale})");
    }
    Ok(())
}

/// Build a `tracing` filter from a configured log level.
///
/// Accepts `EnvFilter` directives, but every directive without `=` must be a
/// level name. A bare word like `loud` would otherwise be taken as a target
/// and silently filter out everything.
pub fn log_filter(level: &str) -> Result<EnvFilter> {
    for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        if !directive.contains('=') && directive.parse::<LevelFilter>().is_err() {
            bail!("invalid log level {directive:?} in {level:?} (expected e.g. \"warn\" or \"sprout_core=debug\")");
        }
    }
    EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
