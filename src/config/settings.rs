//! User settings for Spendex
//!
//! Display preferences and the defaults applied to blank form fields.

use serde::{Deserialize, Serialize};

use super::paths::SpendexPaths;
use crate::error::SpendexError;
use crate::models::{ExpenseDefaults, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION};

/// Storage key the record blob is written under
pub const DEFAULT_STORAGE_KEY: &str = "sx_expenses_v1";

/// User settings for Spendex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to every displayed amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Description used when an expense is added without one
    #[serde(default = "default_description")]
    pub default_description: String,

    /// Category used when an expense is added without one
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Key of the persisted record blob
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_description: default_description(),
            default_category: default_category(),
            storage_key: default_storage_key(),
        }
    }
}

impl Settings {
    /// Defaults to apply to blank description/category fields
    pub fn expense_defaults(&self) -> ExpenseDefaults {
        ExpenseDefaults {
            description: self.default_description.clone(),
            category: self.default_category.clone(),
        }
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendexPaths) -> Result<Self, SpendexError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendexError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendexError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendexPaths) -> Result<(), SpendexError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendexError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendexError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
