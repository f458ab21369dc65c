//! # stockpile-store: Persistence Layer for Stockpile
//!
//! Reads and writes the inventory JSON file, loads configuration, and wraps
//! both around a [`stockpile_core::Inventory`] in the [`Stockroom`] facade.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockpile Data Flow                              │
//! │                                                                         │
//! │  Caller (demo binary, application code)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stockpile-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Stockroom    │    │     file      │    │    config    │  │   │
//! │  │   │ (facade)      │───►│ load / save   │    │ StoreConfig  │  │   │
//! │  │   │               │    │ JSON object   │    │ TOML + env   │  │   │
//! │  │   └───────┬───────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  └───────────┼────────────────────┼────────────────────────────────┘   │
//! │              ▼                    ▼                                     │
//! │     stockpile-core          inventory.json                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`stockroom`] - Inventory + config facade
//! - [`file`] - JSON load (lenient) and save (strict)
//! - [`config`] - Store configuration
//! - [`error`] - Store error types

pub mod config;
pub mod error;
pub mod file;
pub mod stockroom;

pub use config::{InventorySettings, StoreConfig, DEFAULT_DATA_FILE};
pub use error::{LoadError, StoreError, StoreResult};
pub use file::LoadOutcome;
pub use stockroom::Stockroom;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for binaries.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockpile_store=trace` - Trace this crate only
/// - Default: INFO level
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
