//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Menu / order operation failures                │
//! │  └── ValidationError  - Catalog input validation failures              │
//! │                                                                         │
//! │  bistro-cli errors (app)                                               │
//! │  └── CliError         - Config loading + CoreError                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failing operation leaves its receiver untouched. A second invoice
//! on a closed order is NOT an error; see [`crate::order::Order::print_invoice`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Menu and order errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A child index fell outside `[0, len)`.
    ///
    /// ## When This Occurs
    /// - `MenuBundle::get_child` / `remove_child` with a negative index
    /// - Same calls with `index >= children_count()`
    /// - `Menu::get_child` / `remove_child` likewise
    #[error("Index {index} out of range for {len} entries")]
    OutOfRange { index: i64, len: usize },

    /// A required collaborator or argument was not supplied.
    ///
    /// ## When This Occurs
    /// - `OrderBuilder::build` without a reservation or a staff member
    #[error("Invalid argument: {field} is required")]
    InvalidArgument { field: String },

    /// A component was used as a variant it is not.
    ///
    /// ## When This Occurs
    /// - `MenuComponent::as_bundle` / `as_bundle_mut` on an item
    /// - `MenuComponent::as_leaf` on a bundle
    #[error("Expected a menu {expected}, found a menu {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog data and pricing config.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Amount must not be below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
