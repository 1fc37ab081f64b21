use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::{
    currency::{CurrencyCode, LocaleConfig},
    errors::{ConfigError, LedgerError},
    storage::json_backend::write_atomic,
    utils::paths::{config_file_in, ensure_dir},
};

const DEFAULT_PROGRESS_WIDTH: usize = 30;
const MAX_PROGRESS_WIDTH: usize = 120;

/// User preferences for presenting the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub progress_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-NG".into(),
            currency: "NGN".into(),
            progress_width: DEFAULT_PROGRESS_WIDTH,
        }
    }
}

impl Config {
    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }

    /// Copy of this config with `key` set to `value`.
    pub fn with_value(&self, key: &str, value: &str) -> Result<Config, ConfigError> {
        let value = value.trim();
        let mut next = self.clone();
        match key.trim().to_ascii_lowercase().as_str() {
            "locale" => {
                if value.is_empty() || value.contains(char::is_whitespace) {
                    return Err(invalid("locale", value));
                }
                next.locale = value.to_string();
            }
            "currency" => {
                if value.len() != 3 || !value.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(invalid("currency", value));
                }
                next.currency = CurrencyCode::new(value).0;
            }
            "progress_width" | "width" => {
                next.progress_width = value
                    .parse::<usize>()
                    .ok()
                    .filter(|width| (1..=MAX_PROGRESS_WIDTH).contains(width))
                    .ok_or_else(|| invalid("progress_width", value))?;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(next)
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Loads the saved config. A missing file yields defaults; a malformed one is
    /// reported and also yields defaults.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&data) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "config unreadable, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_and_reload() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            locale: "en-US".into(),
            currency: "USD".into(),
            progress_width: 12,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"currency":"EUR"}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.progress_width, DEFAULT_PROGRESS_WIDTH);
    }

    #[test]
    fn with_value_validates_each_key() {
        let config = Config::default();
        let updated = config.with_value("currency", "usd").unwrap();
        assert_eq!(updated.currency, "USD");
        assert_eq!(config.with_value("width", "12").unwrap().progress_width, 12);
        assert_eq!(config.with_value("locale", "fr-FR").unwrap().locale, "fr-FR");
        assert!(matches!(
            config.with_value("currency", "dollars"),
            Err(ConfigError::InvalidValue { key: "currency", .. })
        ));
        assert!(config.with_value("progress_width", "0").is_err());
        assert_eq!(
            config.with_value("theme", "dark"),
            Err(ConfigError::UnknownKey("theme".into()))
        );
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{").unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }
}
