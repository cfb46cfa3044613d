//! # Validation Module
//!
//! Input checks for catalog entries, order quantities and pricing config.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuLeaf::new / MenuBundle::new ──► validate_item_name                 │
//! │                                  └─► validate_price                     │
//! │                                                                         │
//! │  Order::add_item ──────────────────► validate_quantity                  │
//! │                                                                         │
//! │  PricingConfig::validate ──────────► validate_rate (× 3)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::validation::{validate_item_name, validate_quantity};
//!
//! assert!(validate_item_name("Chicken Rice").is_ok());
//! assert!(validate_quantity(5).is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Rate;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted catalog name.
pub const MAX_NAME_LEN: usize = 100;

/// Highest accepted unit or bundle price, in cents (1,000,000.00).
///
/// Keeps `price × quantity` and the invoice sums far inside `Decimal` range.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item or bundle name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Set Lunch A").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an ordered quantity.
///
/// ## Rules
/// - Zero is allowed (the unset default)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if i64::from(qty) > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit or bundle price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (complimentary items)
/// - At most [`MAX_PRICE_CENTS`] cents
///
/// ## Example
/// ```rust
/// use bistro_core::money::Money;
/// use bistro_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price > Money::from_cents(MAX_PRICE_CENTS) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS / 100,
        });
    }

    Ok(())
}

/// Validates a percentage rate.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%)
pub fn validate_rate(field: &str, rate: Rate) -> ValidationResult<()> {
    if rate.bps() > 10000 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Laksa").is_ok());
        assert!(validate_item_name("Family Feast (4 pax)").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert_eq!(
            validate_quantity(1000),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 0,
                max: 999,
            })
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(450)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());

        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(MAX_PRICE_CENTS + 1)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: 1_000_000,
            })
        );
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate("tax_rate", Rate::from_bps(0)).is_ok());
        assert!(validate_rate("tax_rate", Rate::from_bps(700)).is_ok());
        assert!(validate_rate("tax_rate", Rate::from_bps(10000)).is_ok());
        assert!(validate_rate("tax_rate", Rate::from_bps(10001)).is_err());
    }
}
