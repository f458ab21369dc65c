//! # Store Error Types
//!
//! Error types for persistence and configuration.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  WRITE SIDE (hard)                  READ SIDE (soft)                   │
//! │  ─────────────────                  ────────────────                   │
//! │  std::io::Error / serde_json        file missing / corrupt             │
//! │       │                                  │                             │
//! │       ▼                                  ▼                             │
//! │  StoreError ─► returned to caller   LoadError ─► logged, inventory     │
//! │                                                  reset to empty        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use stockpile_core::CoreError;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Store Error
// =============================================================================

/// Failures surfaced to the caller: saving, configuration, and inventory
/// rule violations passing through the [`Stockroom`](crate::Stockroom) facade.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Writing the inventory file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the inventory failed.
    #[error("Failed to serialize inventory: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// Inventory rule violation (validation, overflow).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::ConfigSaveFailed(err.to_string())
    }
}

impl StoreError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidConfig(_)
                | StoreError::ConfigLoadFailed(_)
                | StoreError::ConfigSaveFailed(_)
        )
    }

    /// Returns true if the caller passed a malformed name, quantity or threshold.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StoreError::Core(err) if err.is_validation())
    }
}

// =============================================================================
// Load Error
// =============================================================================

/// Why reading an inventory file did not produce an inventory.
///
/// Never returned by [`load`](crate::file::load); it is logged and reported
/// through [`LoadOutcome`](crate::file::LoadOutcome) instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No file at the path (expected on first run).
    #[error("File {} not found", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be opened or read.
    #[error("Error reading {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not valid JSON.
    #[error("Error reading {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but the top-level value is not an object.
    #[error("Invalid file format in {}: expected an object, found {found}", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    /// A value could not be turned into an integer quantity.
    #[error("Invalid quantity for {item} in {}: {value}", path.display())]
    InvalidQuantity {
        path: PathBuf,
        item: String,
        value: String,
    },
}

impl LoadError {
    /// Returns true for the first-run case (file simply absent).
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
