//! Application configuration management.

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currency and calendar settings.
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Report selection and export settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Record store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Currency and calendar configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Units of pivot currency (XOF) per unit of the other currency.
    #[serde(default = "default_peg_rate")]
    pub peg_rate: Decimal,
    /// Currency used for dashboard and report figures.
    #[serde(default = "default_display_currency")]
    pub display_currency: String,
    /// Decimal places used when rendering amounts.
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u32,
    /// IANA timezone that defines month boundaries.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_peg_rate() -> Decimal {
    Decimal::new(655_957, 3)
}

fn default_display_currency() -> String {
    "EUR".to_string()
}

fn default_display_decimals() -> u32 {
    2
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            peg_rate: default_peg_rate(),
            display_currency: default_display_currency(),
            display_decimals: default_display_decimals(),
            timezone: default_timezone(),
        }
    }
}

impl LedgerConfig {
    /// Parses the configured display currency.
    ///
    /// # Errors
    ///
    /// Returns the unknown code when it is not a supported currency.
    pub fn display_currency(&self) -> Result<Currency, String> {
        Currency::from_str(&self.display_currency)
    }
}

/// Report selection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Calendar year of the reported month (defaults to the current year).
    #[serde(default)]
    pub year: Option<i32>,
    /// Reported month, 1-12 (defaults to the current month).
    #[serde(default)]
    pub month: Option<u32>,
    /// Restrict sales to a single location.
    #[serde(default)]
    pub location: Option<String>,
    /// Number of products listed in the top products section.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Directory receiving CSV exports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_top_n() -> usize {
    5
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            year: None,
            month: None,
            location: None,
            top_n: default_top_n(),
            output_dir: default_output_dir(),
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// JSON snapshot holding products, sales and expenses.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("data/snapshot.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("OLOOH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ledger.peg_rate, dec!(655.957));
        assert_eq!(config.ledger.display_currency().unwrap(), Currency::Eur);
        assert_eq!(config.ledger.display_decimals, 2);
        assert_eq!(config.report.top_n, 5);
        assert!(config.report.location.is_none());
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("OLOOH__REPORT__YEAR", Some("2025")),
                ("OLOOH__REPORT__MONTH", Some("3")),
                ("OLOOH__LEDGER__DISPLAY_CURRENCY", Some("XOF")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.report.year, Some(2025));
                assert_eq!(config.report.month, Some(3));
                assert_eq!(config.ledger.display_currency().unwrap(), Currency::Xof);
                assert_eq!(config.ledger.peg_rate, dec!(655.957));
            },
        );
    }

    #[test]
    fn test_unknown_display_currency() {
        let ledger = LedgerConfig {
            display_currency: "USD".into(),
            ..LedgerConfig::default()
        };
        assert!(ledger.display_currency().is_err());
    }
}
