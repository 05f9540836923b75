//! Configuration management for shien
//!
//! Collects the schedule source, fetch timeout and reference date from the
//! command line and environment, and validates them before any fetch.

use crate::{cli::Args, error::ShienError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Where the schedule CSV comes from
    pub source: SourceConfig,
    /// Fetch timeout in seconds
    pub timeout_secs: u64,
    /// Reference date for relative expressions
    pub today: NaiveDate,
}

/// Schedule source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceConfig {
    /// Published spreadsheet, identified by document key and tab gid
    Remote { key: String, gid: String },
    /// Local CSV export
    File(PathBuf),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            source: SourceConfig::Remote {
                key: String::new(),
                gid: String::new(),
            },
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            today: Local::now().date_naive(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ShienError> {
        let source = match &args.csv {
            Some(path) => SourceConfig::File(path.clone()),
            None => SourceConfig::Remote {
                key: args.key.clone().unwrap_or_default(),
                gid: args.gid.clone().unwrap_or_default(),
            },
        };

        let mut config = Self {
            debug: args.debug,
            source,
            timeout_secs: args.timeout,
            ..Self::default()
        };
        if let Some(today) = args.today {
            config.today = today;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ShienError> {
        match &self.source {
            SourceConfig::Remote { key, gid } => {
                if key.trim().is_empty() {
                    return Err(ShienError::config(
                        "Spreadsheet key is not set (use --key or OFLS_KEY)",
                    ));
                }
                if gid.trim().is_empty() {
                    return Err(ShienError::config(
                        "Sheet gid is not set (use --gid or OFLS_GID)",
                    ));
                }
            }
            SourceConfig::File(path) => {
                if !path.is_file() {
                    return Err(ShienError::config(format!(
                        "Schedule file not found: {}",
                        path.display()
                    )));
                }
            }
        }

        if self.timeout_secs == 0 {
            return Err(ShienError::config("Timeout must be at least one second"));
        }

        Ok(())
    }

    /// Fetch timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
