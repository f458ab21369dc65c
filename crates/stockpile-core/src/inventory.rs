//! # Inventory
//!
//! The item → quantity mapping and every operation on it.
//!
//! ## Stock Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Operation              Mapping Change                                  │
//! │  ─────────              ──────────────                                  │
//! │                                                                         │
//! │  add(item, n) ────────► items[item] += n   (entry created if absent)   │
//! │                                                                         │
//! │  remove(item, n) ─────► items[item] -= n                               │
//! │                         result <= 0 → entry deleted                    │
//! │                         item absent → no-op + warning                  │
//! │                                                                         │
//! │  quantity(item) ──────► read only, absent → 0                          │
//! │                                                                         │
//! │  replace_with(other) ─► whole mapping swapped (used by file load)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every stored quantity is > 0
//! - Every stored name is non-blank (stored exactly as given, untrimmed)
//! - Iteration follows insertion order
//!
//! ## Thread Safety
//! `Inventory` is a plain owned value mutated through `&mut self`. It does no
//! locking of its own; callers sharing one across threads wrap it themselves.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::activity::ActivityLog;
use crate::error::{CoreError, CoreResult};
use crate::validation::{
    validate_add_quantity, validate_item_name, validate_remove_quantity, validate_threshold,
};

// =============================================================================
// Removal Outcome
// =============================================================================

/// What a successful [`Inventory::remove`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Stock was reduced and `remaining` units are left.
    Decremented { remaining: i64 },

    /// Stock reached zero (or would have gone below) so the entry was deleted.
    Depleted,

    /// The item was not in the inventory; nothing changed.
    Missing,
}

impl Removal {
    /// Quantity left after the removal (0 when depleted or missing).
    pub fn remaining(&self) -> i64 {
        match self {
            Removal::Decremented { remaining } => *remaining,
            Removal::Depleted | Removal::Missing => 0,
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// Insertion-ordered mapping from item name to quantity on hand.
///
/// Serializes as a flat JSON object (`{"apple": 7, "banana": 2}`).
///
/// ## Example
/// ```rust
/// use stockpile_core::{Inventory, Removal};
///
/// let mut inventory = Inventory::new();
/// inventory.add("apple", 10, None).unwrap();
/// inventory.add("banana", 2, None).unwrap();
///
/// assert_eq!(inventory.remove("apple", 3).unwrap(), Removal::Decremented { remaining: 7 });
/// assert_eq!(inventory.remove("grape", 2).unwrap(), Removal::Missing);
/// assert_eq!(inventory.low_stock_items(5).unwrap(), vec!["banana".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: IndexMap<String, i64>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from raw `(name, quantity)` pairs.
    ///
    /// Entries that would break an invariant (blank name, quantity <= 0) are
    /// dropped with a warning. A repeated name keeps the last quantity.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        let mut items = IndexMap::new();

        for (item, qty) in entries {
            if validate_item_name(&item).is_err() {
                warn!(quantity = qty, "Dropping entry with blank item name");
                continue;
            }
            if qty <= 0 {
                warn!(item = %item, quantity = qty, "Dropping entry with non-positive quantity");
                continue;
            }
            items.insert(item, qty);
        }

        Inventory { items }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds `quantity` units of `item`, returning the new total.
    ///
    /// A zero-unit add on an absent item leaves the mapping untouched, so no
    /// zero-quantity entry is ever stored. When `log` is supplied, an
    /// `Added <qty> of <item>` entry is appended to it.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] for a blank name or a negative quantity
    /// - [`CoreError::QuantityOverflow`] if the total would exceed `i64::MAX`
    pub fn add(
        &mut self,
        item: &str,
        quantity: i64,
        log: Option<&mut ActivityLog>,
    ) -> CoreResult<i64> {
        validate_item_name(item)?;
        validate_add_quantity(quantity)?;

        let current = self.quantity(item);
        let total = current
            .checked_add(quantity)
            .ok_or_else(|| CoreError::QuantityOverflow {
                item: item.to_string(),
                current,
                added: quantity,
            })?;

        if total > 0 {
            self.items.insert(item.to_string(), total);
        } else {
            debug!(item = %item, "Zero-quantity add on absent item, nothing stored");
        }

        if let Some(log) = log {
            log.record(format!("Added {} of {}", quantity, item));
        }

        info!(item = %item, added = quantity, total, "Added stock");
        Ok(total)
    }

    /// Removes `quantity` units of `item`.
    ///
    /// Removing as much or more than is on hand deletes the entry; stock never
    /// goes negative. Removing an item that isn't stocked is not an error.
    ///
    /// ## Errors
    /// [`CoreError::Validation`] for a blank name or a quantity <= 0.
    pub fn remove(&mut self, item: &str, quantity: i64) -> CoreResult<Removal> {
        validate_item_name(item)?;
        validate_remove_quantity(quantity)?;

        let Some(current) = self.items.get_mut(item) else {
            warn!(item = %item, "Tried to remove non-existing item");
            return Ok(Removal::Missing);
        };

        let remaining = current.saturating_sub(quantity);
        let outcome = if remaining > 0 {
            *current = remaining;
            Removal::Decremented { remaining }
        } else {
            self.items.shift_remove(item);
            Removal::Depleted
        };

        info!(
            item = %item,
            removed = quantity,
            remaining = outcome.remaining(),
            "Removed stock"
        );
        Ok(outcome)
    }

    /// Replaces the whole mapping with `other`.
    pub fn replace_with(&mut self, other: Inventory) {
        self.items = other.items;
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Quantity on hand for `item`, or 0 when it isn't stocked.
    ///
    /// Any string is accepted, including an empty one.
    pub fn quantity(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates `(name, quantity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.items.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    /// Names of items whose quantity is strictly below `threshold`, in
    /// insertion order.
    ///
    /// ## Errors
    /// [`CoreError::Validation`] if `threshold` is negative.
    pub fn low_stock_items(&self, threshold: i64) -> CoreResult<Vec<String>> {
        validate_threshold(threshold)?;

        let low: Vec<String> = self
            .items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect();

        info!(threshold, items = ?low, "Items below threshold");
        Ok(low)
    }

    /// Snapshot of the inventory sorted by item name, ready for display.
    pub fn report(&self) -> InventoryReport {
        let mut lines: Vec<(String, i64)> = self
            .items
            .iter()
            .map(|(item, qty)| (item.clone(), *qty))
            .collect();
        lines.sort();

        InventoryReport { lines }
    }
}

impl FromIterator<(String, i64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Inventory::from_entries(iter)
    }
}

// =============================================================================
// Report
// =============================================================================

/// Heading printed above every report.
pub const REPORT_HEADING: &str = "=== Inventory Report ===";

/// Line printed when there is nothing in stock.
pub const EMPTY_REPORT_LINE: &str = "No items available in stock.";

/// Human-readable inventory listing, sorted by item name ascending.
///
/// ```text
/// === Inventory Report ===
/// apple → 7
/// banana → 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport {
    lines: Vec<(String, i64)>,
}

impl InventoryReport {
    /// Sorted `(name, quantity)` rows.
    pub fn lines(&self) -> &[(String, i64)] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", REPORT_HEADING)?;

        if self.lines.is_empty() {
            return write!(f, "\n{}", EMPTY_REPORT_LINE);
        }

        for (item, qty) in &self.lines {
            write!(f, "\n{} → {}", item, qty)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add("apple", 10, None).unwrap();
        inventory.add("banana", 2, None).unwrap();
        inventory.add("orange", 8, None).unwrap();
        inventory
    }

    #[test]
    fn test_add_creates_and_increments() {
        let mut inventory = Inventory::new();

        assert_eq!(inventory.add("apple", 4, None).unwrap(), 4);
        assert_eq!(inventory.add("apple", 6, None).unwrap(), 10);
        assert_eq!(inventory.quantity("apple"), 10);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_add_keeps_name_untrimmed() {
        let mut inventory = Inventory::new();
        inventory.add(" apple ", 1, None).unwrap();

        assert!(inventory.contains(" apple "));
        assert!(!inventory.contains("apple"));
    }

    #[test]
    fn test_add_zero_to_absent_item_stores_nothing() {
        let mut inventory = Inventory::new();

        assert_eq!(inventory.add("apple", 0, None).unwrap(), 0);
        assert!(inventory.is_empty());

        inventory.add("pear", 3, None).unwrap();
        assert_eq!(inventory.add("pear", 0, None).unwrap(), 3);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut inventory = Inventory::new();

        let err = inventory.add("", 1, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
        assert!(inventory.add("   ", 1, None).is_err());

        let err = inventory.add("apple", -1, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_add_overflow() {
        let mut inventory = Inventory::new();
        inventory.add("apple", i64::MAX, None).unwrap();

        let err = inventory.add("apple", 1, None).unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow { .. }));
        assert_eq!(inventory.quantity("apple"), i64::MAX);
    }

    #[test]
    fn test_add_records_activity() {
        let mut inventory = Inventory::new();
        let mut log = ActivityLog::new();

        inventory.add("apple", 10, Some(&mut log)).unwrap();
        inventory.add("banana", 2, Some(&mut log)).unwrap();
        inventory.add("cherry", 1, None).unwrap();

        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["Added 10 of apple", "Added 2 of banana"]);
    }

    #[test]
    fn test_remove_decrements() {
        let mut inventory = stocked();

        let outcome = inventory.remove("apple", 3).unwrap();
        assert_eq!(outcome, Removal::Decremented { remaining: 7 });
        assert_eq!(inventory.quantity("apple"), 7);
    }

    #[test]
    fn test_remove_exact_and_over_removal_delete_entry() {
        let mut inventory = stocked();

        assert_eq!(inventory.remove("banana", 2).unwrap(), Removal::Depleted);
        assert!(!inventory.contains("banana"));

        assert_eq!(inventory.remove("orange", 100).unwrap(), Removal::Depleted);
        assert!(!inventory.contains("orange"));
        assert_eq!(inventory.quantity("orange"), 0);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut inventory = stocked();
        let before = inventory.clone();

        assert_eq!(inventory.remove("grape", 2).unwrap(), Removal::Missing);
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_remove_rejects_bad_input() {
        let mut inventory = stocked();

        assert!(inventory.remove("", 1).is_err());
        assert!(inventory.remove(" ", 1).is_err());
        assert!(inventory.remove("apple", 0).is_err());
        assert!(inventory.remove("apple", -3).is_err());
        assert_eq!(inventory.quantity("apple"), 10);
    }

    #[test]
    fn test_remove_preserves_order_of_others() {
        let mut inventory = stocked();
        inventory.remove("apple", 10).unwrap();

        let names: Vec<&str> = inventory.iter().map(|(item, _)| item).collect();
        assert_eq!(names, vec!["banana", "orange"]);
    }

    #[test]
    fn test_quantity_of_empty_name_is_zero() {
        assert_eq!(stocked().quantity(""), 0);
    }

    #[test]
    fn test_low_stock_items() {
        let inventory = stocked();

        assert_eq!(inventory.low_stock_items(5).unwrap(), vec!["banana"]);
        assert!(inventory.low_stock_items(0).unwrap().is_empty());
        assert_eq!(
            inventory.low_stock_items(100).unwrap(),
            vec!["apple", "banana", "orange"]
        );
    }

    #[test]
    fn test_low_stock_threshold_is_strict() {
        let inventory = stocked();
        assert_eq!(inventory.low_stock_items(2).unwrap(), Vec::<String>::new());
        assert_eq!(inventory.low_stock_items(3).unwrap(), vec!["banana"]);
    }

    #[test]
    fn test_low_stock_rejects_negative_threshold() {
        let err = stocked().low_stock_items(-1).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_entries_drops_invalid() {
        let inventory = Inventory::from_entries(vec![
            ("apple".to_string(), 3),
            ("".to_string(), 4),
            ("ghost".to_string(), 0),
            ("debt".to_string(), -2),
            ("pear".to_string(), 1),
        ]);

        let entries: Vec<(&str, i64)> = inventory.iter().collect();
        assert_eq!(entries, vec![("apple", 3), ("pear", 1)]);
    }

    #[test]
    fn test_replace_with_and_clear() {
        let mut inventory = stocked();
        let replacement: Inventory = vec![("kiwi".to_string(), 9)].into_iter().collect();

        inventory.replace_with(replacement);
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.quantity("apple"), 0);
        assert_eq!(inventory.quantity("kiwi"), 9);

        inventory.clear();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let json = serde_json::to_string(&stocked()).unwrap();
        assert_eq!(json, r#"{"apple":10,"banana":2,"orange":8}"#);
    }

    #[test]
    fn test_report_sorted() {
        let mut inventory = Inventory::new();
        inventory.add("pear", 1, None).unwrap();
        inventory.add("apple", 7, None).unwrap();

        let report = inventory.report();
        assert_eq!(
            report.lines(),
            &[("apple".to_string(), 7), ("pear".to_string(), 1)]
        );
        assert_eq!(
            report.to_string(),
            "=== Inventory Report ===\napple → 7\npear → 1"
        );
    }

    #[test]
    fn test_report_empty() {
        let report = Inventory::new().report();
        assert!(report.is_empty());
        assert_eq!(
            report.to_string(),
            "=== Inventory Report ===\nNo items available in stock."
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: add then quantity returns the previous quantity plus qty.
            #[test]
            fn add_increments_by_quantity(
                item in "[a-z][a-z ]{0,15}",
                initial in 0i64..10_000,
                qty in 0i64..10_000
            ) {
                let mut inventory = Inventory::new();
                inventory.add(&item, initial, None).unwrap();
                let before = inventory.quantity(&item);

                inventory.add(&item, qty, None).unwrap();

                prop_assert_eq!(inventory.quantity(&item), before + qty);
            }

            /// Property: remove subtracts while stock lasts, then deletes.
            #[test]
            fn remove_subtracts_or_deletes(
                item in "[a-z]{1,12}",
                stock in 1i64..10_000,
                take in 1i64..20_000
            ) {
                let mut inventory = Inventory::new();
                inventory.add(&item, stock, None).unwrap();

                inventory.remove(&item, take).unwrap();

                if take < stock {
                    prop_assert_eq!(inventory.quantity(&item), stock - take);
                } else {
                    prop_assert!(!inventory.contains(&item));
                    prop_assert_eq!(inventory.quantity(&item), 0);
                }
            }

            /// Property: no stored quantity is ever <= 0.
            #[test]
            fn stored_quantities_stay_positive(
                ops in proptest::collection::vec((any::<bool>(), 0usize..3, 0i64..20), 0..50)
            ) {
                let names = ["apple", "banana", "orange"];
                let mut inventory = Inventory::new();

                for (is_add, idx, qty) in ops {
                    if is_add {
                        inventory.add(names[idx], qty, None).unwrap();
                    } else if qty > 0 {
                        inventory.remove(names[idx], qty).unwrap();
                    }
                }

                prop_assert!(inventory.iter().all(|(_, qty)| qty > 0));
            }
        }
    }
}
