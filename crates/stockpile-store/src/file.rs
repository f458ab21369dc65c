//! # Inventory File
//!
//! Reading and writing the inventory as a JSON object on disk.
//!
//! ## Load / Save Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    inventory.json                                       │
//! │                                                                         │
//! │  load(path)                          save(path)                        │
//! │  ──────────                          ──────────                        │
//! │  file missing   → empty + WARN       serialize, 2-space indent         │
//! │  bad JSON       → empty + ERROR      create / overwrite file           │
//! │  not an object  → empty + ERROR      any failure → StoreError          │
//! │  bad quantity   → empty + ERROR                                        │
//! │  ok             → replace + INFO     ok → INFO                         │
//! │                                                                         │
//! │  load never fails; save always reports failure                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format
//! ```json
//! {
//!   "apple": 7,
//!   "banana": 2
//! }
//! ```
//!
//! Values are coerced to integers on read: JSON integers as-is, floats
//! truncated toward zero, booleans as 0/1, and strings holding an integer
//! (`"7"`). Anything else makes the whole file invalid.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde_json::Value;
use stockpile_core::Inventory;
use tracing::{error, info, warn};

use crate::error::{LoadError, StoreResult};

// =============================================================================
// Load Outcome
// =============================================================================

/// What [`load`] did to the inventory.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read; the inventory now holds `items` entries.
    Loaded { items: usize },

    /// No file at the path; the inventory was reset to empty.
    Missing,

    /// The file could not be used; the inventory was reset to empty.
    Corrupt(LoadError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

// =============================================================================
// Reading
// =============================================================================

/// Strictly reads an inventory file, reporting every problem as a [`LoadError`].
///
/// Entries with a blank name or a quantity <= 0 are dropped (with a warning)
/// rather than failing the read.
pub fn read(path: &Path) -> Result<Inventory, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let value: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(LoadError::NotAnObject {
                path: path.to_path_buf(),
                found: json_kind(&other),
            })
        }
    };

    let mut entries = Vec::with_capacity(map.len());
    for (item, raw) in map {
        let qty = coerce_quantity(&raw).ok_or_else(|| LoadError::InvalidQuantity {
            path: path.to_path_buf(),
            item: item.clone(),
            value: raw.to_string(),
        })?;
        entries.push((item, qty));
    }

    Ok(Inventory::from_entries(entries))
}

/// Replaces `inventory` with the contents of `path`.
///
/// Never fails: a missing or unusable file leaves `inventory` empty and is
/// logged (warning for missing, error otherwise).
pub fn load(inventory: &mut Inventory, path: &Path) -> LoadOutcome {
    match read(path) {
        Ok(loaded) => {
            inventory.replace_with(loaded);
            info!(path = %path.display(), items = inventory.len(), "Loaded inventory data");
            LoadOutcome::Loaded {
                items: inventory.len(),
            }
        }
        Err(err) if err.is_not_found() => {
            inventory.clear();
            warn!(path = %path.display(), "File not found. Starting with empty inventory.");
            LoadOutcome::Missing
        }
        Err(err) => {
            inventory.clear();
            error!(path = %path.display(), error = %err, "Failed to read inventory file");
            LoadOutcome::Corrupt(err)
        }
    }
}

/// Converts a JSON value into an integer quantity, if it represents one.
fn coerce_quantity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            if n.is_u64() {
                // Positive but beyond i64::MAX
                return None;
            }
            let f = n.as_f64()?.trunc();
            if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                Some(f as i64)
            } else {
                None
            }
        }
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Writing
// =============================================================================

/// Writes `inventory` to `path` as a JSON object with 2-space indentation,
/// creating or overwriting the file.
///
/// ## Errors
/// Any I/O or serialization failure is returned unchanged.
pub fn save(inventory: &Inventory, path: &Path) -> StoreResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, inventory)?;
    writer.flush()?;

    info!(path = %path.display(), items = inventory.len(), "Saved inventory data");
    Ok(())
}
