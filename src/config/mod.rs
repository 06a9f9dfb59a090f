//! Persistent user preferences: per-day limits and the preferred currency,
//! stored as JSON under the user config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::currency;
use crate::errors::{TrackerError, TrackerResult};
use crate::ledger::DailyLedger;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User-tunable defaults for building trackers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "TrackerConfig::default_calorie_limit")]
    pub calorie_limit: i64,
    #[serde(default = "TrackerConfig::default_cash_limit")]
    pub cash_limit: i64,
    #[serde(default = "TrackerConfig::default_currency")]
    pub currency: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            calorie_limit: Self::default_calorie_limit(),
            cash_limit: Self::default_cash_limit(),
            currency: Self::default_currency(),
        }
    }
}

impl TrackerConfig {
    fn default_calorie_limit() -> i64 {
        2000
    }

    fn default_cash_limit() -> i64 {
        1000
    }

    fn default_currency() -> String {
        "rub".into()
    }

    /// Checks that both limits are positive and the currency code is one of
    /// the supported lowercase codes.
    pub fn validate(&self) -> TrackerResult<()> {
        if self.calorie_limit <= 0 {
            return Err(TrackerError::Validation(format!(
                "calorie limit must be positive, got {}",
                self.calorie_limit
            )));
        }
        if self.cash_limit <= 0 {
            return Err(TrackerError::Validation(format!(
                "cash limit must be positive, got {}",
                self.cash_limit
            )));
        }
        if currency::lookup(&self.currency).is_none() {
            return Err(TrackerError::Validation(format!(
                "unknown currency code `{}`",
                self.currency
            )));
        }
        Ok(())
    }

    /// Builds an empty calorie ledger with the configured limit.
    pub fn calorie_ledger(&self) -> DailyLedger {
        DailyLedger::new(self.calorie_limit)
    }

    /// Builds an empty cash ledger with the configured limit.
    pub fn cash_ledger(&self) -> DailyLedger {
        DailyLedger::new(self.cash_limit)
    }
}

/// Handles persistence for [`TrackerConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Creates the base directory and points the manager at its config file.
    pub fn with_base_dir(base: PathBuf) -> TrackerResult<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    /// Default base under the platform config directory.
    pub fn default_base_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tracker-core")
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored config, or the defaults when no file exists yet.
    pub fn load(&self) -> TrackerResult<TrackerConfig> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            let config: TrackerConfig = serde_json::from_str(&data)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(TrackerConfig::default())
        }
    }

    /// Validates and saves the config, writing through a temp file so a
    /// failed write never truncates the previous one.
    pub fn save(&self, config: &TrackerConfig) -> TrackerResult<()> {
        config.validate()?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.config_path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".");
    tmp.push(TMP_SUFFIX);
    PathBuf::from(tmp)
}
