//! # Validation Module
//!
//! Input checks run before any inventory mutation.
//!
//! ## What Is Checked
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Rules                                   │
//! │                                                                         │
//! │  item name       → non-empty after trimming (stored untrimmed)         │
//! │  add quantity    → >= 0                                                │
//! │  remove quantity → > 0                                                 │
//! │  threshold       → >= 0                                                │
//! │                                                                         │
//! │  "Is this text / an integer" is answered by the type system.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockpile_core::validation::{validate_item_name, validate_add_quantity};
//!
//! assert!(validate_item_name("apple").is_ok());
//! assert!(validate_add_quantity(0).is_ok());
//! assert!(validate_add_quantity(-1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// Whitespace is trimmed for the check only; callers keep the name as given.
///
/// ```rust
/// use stockpile_core::validation::validate_item_name;
///
/// assert!(validate_item_name(" apple ").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(item: &str) -> ValidationResult<()> {
    if item.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added. Zero is allowed.
pub fn validate_add_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity being removed. Must be positive.
pub fn validate_remove_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a low-stock threshold.
pub fn validate_threshold(threshold: i64) -> ValidationResult<()> {
    if threshold < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "threshold".to_string(),
        });
    }

    Ok(())
}
