//! # Stockpile Demo
//!
//! Runs a short inventory session against the configured data file.
//!
//! ## Usage
//! ```bash
//! cargo run -p stockpile-store --bin demo
//!
//! # Write somewhere else
//! STOCKPILE_DATA_FILE=/tmp/inventory.json cargo run -p stockpile-store --bin demo
//! ```
//!
//! ## Session
//! 1. Add apple ×10, banana ×2, orange ×8
//! 2. Remove apple ×3, then grape ×2 (not stocked, only logged)
//! 3. Print apple stock and low-stock items
//! 4. Save, load it back, print the report

use stockpile_core::ActivityLog;
use stockpile_store::{init_tracing, StoreConfig, Stockroom};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = StoreConfig::load_or_default(None);
    let mut stockroom = Stockroom::new(config);
    let mut activity = ActivityLog::new();

    stockroom.add("apple", 10, Some(&mut activity))?;
    stockroom.add("banana", 2, Some(&mut activity))?;
    stockroom.add("orange", 8, Some(&mut activity))?;
    stockroom.remove("apple", 3)?;
    stockroom.remove("grape", 2)?;

    println!("Apple stock: {}", stockroom.quantity("apple"));
    println!("Low stock items: {:?}", stockroom.low_stock_items()?);

    stockroom.save()?;
    stockroom.load();
    stockroom.print_report();

    println!("\n=== Activity ===");
    for entry in &activity {
        println!("{}", entry);
    }

    Ok(())
}
