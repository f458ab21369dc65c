//! # Stockroom
//!
//! One inventory plus the configuration that says where it is persisted.
//! This is the direct-call API applications use; it forwards mutations and
//! queries to [`Inventory`] and file access to [`crate::file`].
//!
//! ## Usage
//! ```rust,no_run
//! use stockpile_store::{StoreConfig, Stockroom};
//!
//! let mut stockroom = Stockroom::new(StoreConfig::load_or_default(None));
//! stockroom.load();                       // never fails
//! stockroom.add("apple", 10, None)?;
//! stockroom.remove("apple", 3)?;
//! println!("low: {:?}", stockroom.low_stock_items()?);
//! stockroom.save()?;                      // reports write failures
//! # Ok::<(), stockpile_store::StoreError>(())
//! ```
//!
//! Single caller at a time: mutations take `&mut self` and there is no
//! internal locking.

use std::path::Path;

use stockpile_core::{ActivityLog, Inventory, InventoryReport, Removal};

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::file::{self, LoadOutcome};

/// An inventory bound to its store configuration.
#[derive(Debug, Clone, Default)]
pub struct Stockroom {
    inventory: Inventory,
    config: StoreConfig,
}

impl Stockroom {
    /// Creates an empty stockroom. Nothing is read from disk until
    /// [`load`](Self::load) is called.
    pub fn new(config: StoreConfig) -> Self {
        Stockroom {
            inventory: Inventory::new(),
            config,
        }
    }

    /// Creates a stockroom and immediately loads its configured data file.
    pub fn open(config: StoreConfig) -> (Self, LoadOutcome) {
        let mut stockroom = Self::new(config);
        let outcome = stockroom.load();
        (stockroom, outcome)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Stock Operations
    // =========================================================================

    /// Adds stock. See [`Inventory::add`].
    pub fn add(
        &mut self,
        item: &str,
        quantity: i64,
        log: Option<&mut ActivityLog>,
    ) -> StoreResult<i64> {
        Ok(self.inventory.add(item, quantity, log)?)
    }

    /// Removes stock. See [`Inventory::remove`].
    pub fn remove(&mut self, item: &str, quantity: i64) -> StoreResult<Removal> {
        Ok(self.inventory.remove(item, quantity)?)
    }

    /// Quantity on hand, 0 when not stocked.
    pub fn quantity(&self, item: &str) -> i64 {
        self.inventory.quantity(item)
    }

    /// Items below the configured low-stock threshold.
    pub fn low_stock_items(&self) -> StoreResult<Vec<String>> {
        self.low_stock_items_below(self.config.low_stock_threshold())
    }

    /// Items strictly below `threshold`.
    pub fn low_stock_items_below(&self, threshold: i64) -> StoreResult<Vec<String>> {
        Ok(self.inventory.low_stock_items(threshold)?)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replaces the inventory with the configured data file's contents.
    pub fn load(&mut self) -> LoadOutcome {
        let path = self.config.data_file().to_path_buf();
        self.load_from(&path)
    }

    /// Replaces the inventory with the contents of `path`.
    pub fn load_from(&mut self, path: &Path) -> LoadOutcome {
        file::load(&mut self.inventory, path)
    }

    /// Writes the inventory to the configured data file.
    pub fn save(&self) -> StoreResult<()> {
        self.save_to(self.config.data_file())
    }

    /// Writes the inventory to `path`.
    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        file::save(&self.inventory, path)
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    pub fn report(&self) -> InventoryReport {
        self.inventory.report()
    }

    /// Prints the sorted inventory report to stdout.
    pub fn print_report(&self) {
        println!("\n{}", self.report());
    }
}
