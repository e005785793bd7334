//! Configuration
//!
//! Settings are read from CLI arguments with environment fallbacks; a `.env`
//! file, if present, is loaded into the environment first.

use std::path::PathBuf;

use clap::Args;
use jiff::tz::TimeZone;
use rusty_money::iso::{self, Currency};
use thiserror::Error;

use crate::{rentals::DEFAULT_TIME_ZONE, storage::FileStorage};

/// Errors resolving configured values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The time zone name is not in the time zone database.
    #[error("unknown time zone {name:?}")]
    UnknownTimeZone {
        /// Configured name
        name: String,

        /// Lookup failure
        #[source]
        source: jiff::Error,
    },

    /// The currency code is not an ISO 4217 code.
    #[error("unknown currency code {0:?}")]
    UnknownCurrency(String),
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Application settings.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Directory the cart and session are stored in
    #[arg(long, env = "RENTCART_DATA_DIR", default_value = ".rentcart", global = true)]
    pub data_dir: PathBuf,

    /// IANA time zone "today" is evaluated in
    #[arg(long, env = "RENTCART_TIME_ZONE", default_value = DEFAULT_TIME_ZONE, global = true)]
    pub time_zone: String,

    /// ISO 4217 currency amounts are displayed in
    #[arg(long, env = "RENTCART_CURRENCY", default_value = "THB", global = true)]
    pub currency: String,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Resolve the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTimeZone`] if the name cannot be found.
    pub fn time_zone(&self) -> Result<TimeZone, ConfigError> {
        TimeZone::get(&self.time_zone).map_err(|source| ConfigError::UnknownTimeZone {
            name: self.time_zone.clone(),
            source,
        })
    }

    /// Resolve the configured display currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] if the code is not recognised.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        let code = self.currency.trim().to_ascii_uppercase();

        iso::find(&code).ok_or(ConfigError::UnknownCurrency(code))
    }

    /// File storage rooted at the data directory.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}
