//! # Currency Table Configuration
//!
//! Builds a [`CurrencyRegistry`] from a TOML currency table.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Explicit path passed to RegistryConfig::load (highest priority)    │
//! │                                                                         │
//! │  2. Environment Variable                                               │
//! │     COINAGE_CURRENCIES=/etc/coinage/currencies.toml                    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Built-in currency set, no extra currencies                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # currencies.toml
//! include_defaults = true
//!
//! [[currencies]]
//! code = "OMR"
//! name = "Omani Rial"
//! decimal_places = 3
//!
//! [[currencies]]
//! code = "XBT"
//! name = "Bitcoin"
//! decimal_places = 8
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, info};

use crate::currency::{Currency, MAX_DECIMAL_PLACES};
use crate::error::{MoneyError, MoneyResult};
use crate::registry::CurrencyRegistry;

/// Environment variable naming the currency table file.
pub const CONFIG_ENV_VAR: &str = "COINAGE_CURRENCIES";

// =============================================================================
// Currency Definition
// =============================================================================

/// One `[[currencies]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyDef {
    /// Short code, e.g. "OMR". Must not contain whitespace.
    pub code: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Minor-unit digits. Default: 0
    #[serde(default)]
    pub decimal_places: u32,
}

// =============================================================================
// Registry Configuration
// =============================================================================

/// Complete currency table.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Start from the built-in currency set.
    #[serde(default = "default_true")]
    pub include_defaults: bool,

    /// Additional currencies.
    #[serde(default)]
    pub currencies: Vec<CurrencyDef>,
}

fn default_true() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            include_defaults: default_true(),
            currencies: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Parses and validates a TOML currency table.
    pub fn from_toml_str(contents: &str) -> MoneyResult<Self> {
        let config: RegistryConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the currency table from `config_path`, falling back to the
    /// `COINAGE_CURRENCIES` environment variable. A missing file yields
    /// the defaults.
    pub fn load(config_path: Option<PathBuf>) -> MoneyResult<Self> {
        let path = config_path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading currency table from file");
                let contents = std::fs::read_to_string(&path)?;
                Self::from_toml_str(&contents)
            }
            Some(path) => {
                debug!(?path, "Currency table not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Validates the currency table.
    pub fn validate(&self) -> MoneyResult<()> {
        let mut seen = HashSet::new();
        for def in &self.currencies {
            if def.code.is_empty() {
                return Err(MoneyError::InvalidConfig(
                    "currency code must not be empty".into(),
                ));
            }
            if def.code.chars().any(char::is_whitespace) {
                return Err(MoneyError::InvalidConfig(format!(
                    "currency code '{}' must not contain whitespace",
                    def.code
                )));
            }
            if def.decimal_places > MAX_DECIMAL_PLACES {
                return Err(MoneyError::InvalidConfig(format!(
                    "{} has {} decimal places, maximum is {}",
                    def.code, def.decimal_places, MAX_DECIMAL_PLACES
                )));
            }
            if !seen.insert(def.code.as_str()) {
                return Err(MoneyError::DuplicateCurrency(def.code.clone()));
            }
        }
        Ok(())
    }

    /// Builds the registry described by this table.
    pub fn into_registry(self) -> MoneyResult<CurrencyRegistry> {
        self.validate()?;

        let mut registry = if self.include_defaults {
            CurrencyRegistry::with_defaults()
        } else {
            CurrencyRegistry::new()
        };
        for def in self.currencies {
            registry.register(Currency::new(def.code, def.name, def.decimal_places))?;
        }

        info!(currencies = registry.len(), "Currency registry ready");
        Ok(registry)
    }
}
