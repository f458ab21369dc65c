//! # Store Configuration
//!
//! Where the inventory file lives and what counts as low stock.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOCKPILE_DATA_FILE=/var/lib/stockpile/inventory.json              │
//! │     STOCKPILE_LOW_STOCK_THRESHOLD=10                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/stockpile/stockpile.toml (Linux)                         │
//! │     ~/Library/Application Support/com.stockpile.stockpile/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     inventory.json in the working directory, threshold 5              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [inventory]
//! data_file = "inventory.json"
//! low_stock_threshold = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stockpile_core::DEFAULT_LOW_STOCK_THRESHOLD;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Inventory file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Environment variable overriding [`InventorySettings::data_file`].
pub const ENV_DATA_FILE: &str = "STOCKPILE_DATA_FILE";

/// Environment variable overriding [`InventorySettings::low_stock_threshold`].
pub const ENV_LOW_STOCK_THRESHOLD: &str = "STOCKPILE_LOW_STOCK_THRESHOLD";

// =============================================================================
// Inventory Settings
// =============================================================================

/// Settings for the inventory file and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySettings {
    /// Path of the JSON inventory file, relative to the working directory
    /// unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Items with strictly fewer units than this are low on stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_low_stock_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for InventorySettings {
    fn default() -> Self {
        InventorySettings {
            data_file: default_data_file(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

// =============================================================================
// Main Store Configuration
// =============================================================================

/// Complete store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Inventory file and report settings.
    #[serde(default)]
    pub inventory: InventorySettings,
}

impl StoreConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default config pointing at a specific inventory file.
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.inventory.data_file = path.into();
        config
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`stockpile.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| StoreError::ConfigLoadFailed(e.to_string()))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| StoreError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Store config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.inventory.data_file.as_os_str().is_empty() {
            return Err(StoreError::InvalidConfig(
                "data_file must not be empty".into(),
            ));
        }

        if self.inventory.low_stock_threshold < 0 {
            return Err(StoreError::InvalidConfig(format!(
                "low_stock_threshold must be non-negative, got {}",
                self.inventory.low_stock_threshold
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the process environment in
    /// production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATA_FILE) {
            debug!(data_file = %path, "Overriding data file from environment");
            self.inventory.data_file = PathBuf::from(path);
        }

        if let Some(threshold) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            match threshold.trim().parse::<i64>() {
                Ok(t) => {
                    debug!(threshold = t, "Overriding low-stock threshold from environment");
                    self.inventory.low_stock_threshold = t;
                }
                Err(_) => warn!(value = %threshold, "Ignoring unparsable low-stock threshold"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stockpile", "stockpile")
            .map(|dirs| dirs.config_dir().join("stockpile.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the inventory file path.
    pub fn data_file(&self) -> &std::path::Path {
        &self.inventory.data_file
    }

    /// Returns the low-stock threshold.
    pub fn low_stock_threshold(&self) -> i64 {
        self.inventory.low_stock_threshold
    }
}
