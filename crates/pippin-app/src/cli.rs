//! CLI argument definitions for the Pippin application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Pippin — a small keyword-matching chatbot that lives in your terminal.
#[derive(Parser, Debug)]
#[command(name = "pippin", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Thinking-pause duration in milliseconds.
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Do not clear the terminal on startup.
    #[arg(long = "no-clear")]
    pub no_clear: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > PIPPIN_CONFIG env var > platform default
    /// (~/.pippin/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("PIPPIN_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Resolve the thinking-pause duration.
    ///
    /// Priority: --delay-ms flag > config file value.
    pub fn resolve_delay_ms(&self, config_delay_ms: u64) -> u64 {
        self.delay_ms.unwrap_or(config_delay_ms)
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".pippin").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".pippin").join("config.toml");
    }
    PathBuf::from("config.toml")
}
