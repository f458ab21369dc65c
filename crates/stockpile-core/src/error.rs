//! # Error Types
//!
//! Domain-specific error types for stockpile-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockpile-core errors (this file)                                     │
//! │  ├── CoreError        - Inventory rule violations                      │
//! │  └── ValidationError  - Malformed item names / quantities              │
//! │                                                                         │
//! │  stockpile-store errors (separate crate)                               │
//! │  ├── StoreError       - Save / config failures (returned)              │
//! │  └── LoadError        - Read failures (logged, never returned)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Adding would push the stored quantity past `i64::MAX`.
    #[error("Quantity overflow for {item}: {current} + {added} exceeds the maximum")]
    QuantityOverflow {
        item: String,
        current: i64,
        added: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true if this error is an input validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised synchronously before the inventory is touched; a failed
/// validation never leaves a partial update behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} must be a non-empty string")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be a positive integer")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must be a non-negative integer")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
