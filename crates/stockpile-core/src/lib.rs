//! # stockpile-core: Pure Inventory Logic
//!
//! The in-memory item → quantity mapping and its rules, with zero I/O.
//! Persistence lives in `stockpile-store`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockpile Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            stockpile-store (Stockroom facade, demo)             │   │
//! │  │       load ◄── inventory.json ──► save      StoreConfig         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockpile-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │ activity  │  │validation │  │   error   │  │   │
//! │  │   │ Inventory │  │ActivityLog│  │   rules   │  │ CoreError │  │   │
//! │  │   │  Report   │  │  entries  │  │  checks   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILE SYSTEM • NO NETWORK • NO GLOBAL STATE                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`inventory`] - The mapping, its mutations, queries and report
//! - [`activity`] - Caller-owned timestamped activity log
//! - [`validation`] - Item name / quantity / threshold checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockpile_core::{Inventory, DEFAULT_LOW_STOCK_THRESHOLD};
//!
//! let mut inventory = Inventory::new();
//! inventory.add("apple", 10, None).unwrap();
//! inventory.add("banana", 2, None).unwrap();
//! inventory.add("orange", 8, None).unwrap();
//! inventory.remove("apple", 3).unwrap();
//! inventory.remove("grape", 2).unwrap(); // not stocked: logged, not an error
//!
//! assert_eq!(inventory.quantity("apple"), 7);
//! assert_eq!(inventory.quantity("grape"), 0);
//! assert_eq!(
//!     inventory.low_stock_items(DEFAULT_LOW_STOCK_THRESHOLD).unwrap(),
//!     vec!["banana".to_string()]
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod activity;
pub mod error;
pub mod inventory;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use activity::{ActivityEntry, ActivityLog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{Inventory, InventoryReport, Removal};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Threshold used for low-stock checks when none is configured.
///
/// Items with strictly fewer units than this are reported as low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;
