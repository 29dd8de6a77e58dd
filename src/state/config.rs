//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure holding the wallet's
//! starting values: fixture balance, exchange rates, and notification timing.
//! Wallet state itself is never written back; only these settings are.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/lazywallet/config.json`
//! - macOS: `~/Library/Application Support/lazywallet/config.json`
//! - Windows: `%APPDATA%/lazywallet/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! // Load existing config or use defaults
//! let config = AppConfig::load(None);
//! let wallet = WalletState::from_config(&config)?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::{ConfigError, Currency, DEFAULT_EXCHANGE_RATE, PairRate, RateTable};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "lazywallet";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Fixture balance a fresh wallet starts with.
pub const DEFAULT_BALANCE: f64 = 1000.0;

/// How long a notification stays visible.
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3000;

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Every field has a default, so partial files (or an empty `{}`) load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Balance the wallet is created with, in the reference currency.
    pub initial_balance: f64,
    /// Currency the balance is displayed in.
    pub reference_currency: Currency,
    /// Rate used for any pair without an explicit entry.
    pub default_rate: f64,
    /// Per-pair rate overrides.
    pub pair_rates: Vec<PairRate>,
    /// Notification lifetime in milliseconds.
    pub notification_timeout_ms: u64,
    /// Whether to start with the two fixture transactions.
    pub seed_transactions: bool,
    /// Initial source currency in the transfer form.
    pub default_from: Currency,
    /// Initial destination currency in the transfer form.
    pub default_to: Currency,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_balance: DEFAULT_BALANCE,
            reference_currency: Currency::Usd,
            default_rate: DEFAULT_EXCHANGE_RATE,
            pair_rates: Vec::new(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            seed_transactions: true,
            default_from: Currency::Usd,
            default_to: Currency::Eur,
        }
    }
}

impl AppConfig {
    /// Returns the path to the default configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from `path`, or the default location.
    ///
    /// A missing, unreadable, malformed, or invalid file falls back to the
    /// defaults with a warning.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        };

        match resolved.and_then(|path| Self::try_load(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load and validate the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    /// - A value fails [`AppConfig::validate`]
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Writes the configuration as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Checks that the values keep wallet invariants intact.
    ///
    /// # Errors
    ///
    /// Returns the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_balance.is_finite() || self.initial_balance < 0.0 {
            return Err(ConfigError::InvalidBalance(self.initial_balance));
        }
        if self.notification_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        self.rate_table().map(|_| ())
    }

    /// Builds the exchange rate table described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRate`] for a non-positive rate.
    pub fn rate_table(&self) -> Result<RateTable, ConfigError> {
        RateTable::from_pairs(self.default_rate, &self.pair_rates)
    }

    #[must_use]
    pub const fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("lazywallet-test-{}-{name}", std::process::id()))
            .join(CONFIG_FILE)
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.initial_balance, 1000.0);
        assert_eq!(config.reference_currency, Currency::Usd);
        assert_eq!(config.default_rate, 0.85);
        assert_eq!(config.notification_timeout(), Duration::from_millis(3000));
        assert!(config.seed_transactions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"initial_balance": 250.0}"#).unwrap();
        assert_eq!(config.initial_balance, 250.0);
        assert_eq!(config.default_to, Currency::Eur);
        assert!(config.pair_rates.is_empty());
    }

    #[test]
    fn test_pair_rates_deserialize() {
        let json = r#"{"pair_rates": [{"from": "USD", "to": "JPY", "rate": 150.0}]}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        let table = config.rate_table().unwrap();
        assert_eq!(table.rate(Currency::Usd, Currency::Jpy), 150.0);
    }

    #[rstest]
    #[case::negative_balance(AppConfig { initial_balance: -1.0, ..AppConfig::default() })]
    #[case::nan_balance(AppConfig { initial_balance: f64::NAN, ..AppConfig::default() })]
    #[case::zero_rate(AppConfig { default_rate: 0.0, ..AppConfig::default() })]
    #[case::zero_timeout(AppConfig { notification_timeout_ms: 0, ..AppConfig::default() })]
    fn test_validate_rejects(#[case] config: AppConfig) {
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let config = AppConfig {
            initial_balance: 42.0,
            seed_transactions: false,
            ..AppConfig::default()
        };

        config.save(&path).unwrap();
        let loaded = AppConfig::try_load(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_falls_back_on_invalid_file() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"initial_balance": -5.0}"#).unwrap();

        assert!(AppConfig::try_load(&path).is_err());
        assert_eq!(AppConfig::load(Some(&path)), AppConfig::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_falls_back_on_missing_file() {
        let path = temp_config_path("missing");
        assert_eq!(AppConfig::load(Some(&path)), AppConfig::default());
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
