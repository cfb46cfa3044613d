//! # Pricing Configuration
//!
//! Rates and behaviour switches an [`crate::order::Order`] is opened with.
//!
//! ## Defaults
//! ```text
//! ┌───────────────────────────┬──────────┬──────────────────────────────────┐
//! │ Field                     │ Default  │ Meaning                          │
//! ├───────────────────────────┼──────────┼──────────────────────────────────┤
//! │ discount_rate             │ 1000 bps │ membership discount (10%)        │
//! │ tax_rate                  │  700 bps │ GST (7%)                         │
//! │ service_charge_rate       │ 1000 bps │ service charge (10%)             │
//! │ quantity_policy           │ copy     │ which object add_item stamps     │
//! └───────────────────────────┴──────────┴──────────────────────────────────┘
//! ```
//!
//! The config is plain data; the app decides where it is loaded from.

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::types::Rate;
use crate::validation::validate_rate;

/// Default membership discount: 10%.
pub const DEFAULT_DISCOUNT_RATE: Rate = Rate::from_bps(1000);

/// Default tax rate: 7%.
pub const DEFAULT_TAX_RATE: Rate = Rate::from_bps(700);

/// Default service charge: 10%.
pub const DEFAULT_SERVICE_CHARGE_RATE: Rate = Rate::from_bps(1000);

// =============================================================================
// Quantity Policy
// =============================================================================

/// Which object receives the quantity when an item is added to an order.
///
/// ## The Two Behaviours
/// ```text
/// catalog item ──copy──► order line
///      │                     │
///      │ StampSource         │ StampCopy (default)
///      ▼                     ▼
/// quantity set here     quantity set here
/// (order line keeps     (catalog untouched)
///  the copied value)
/// ```
///
/// `StampSource` reproduces the historical register behaviour, where the
/// catalog entry was mutated and the order line kept whatever quantity it was
/// copied with (always 0 for bundles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityPolicy {
    /// Set the quantity on the copy stored in the order.
    #[default]
    StampCopy,

    /// Set the quantity on the catalog entry passed in.
    StampSource,
}

impl std::fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityPolicy::StampCopy => write!(f, "stamp_copy"),
            QuantityPolicy::StampSource => write!(f, "stamp_source"),
        }
    }
}

impl std::str::FromStr for QuantityPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stamp_copy" | "copy" => Ok(QuantityPolicy::StampCopy),
            "stamp_source" | "source" | "legacy" => Ok(QuantityPolicy::StampSource),
            _ => Err(ValidationError::NotAllowed {
                field: "quantity_policy".to_string(),
                allowed: vec!["stamp_copy".to_string(), "stamp_source".to_string()],
            }),
        }
    }
}

// =============================================================================
// Pricing Config
// =============================================================================

/// Rates used when an invoice is computed.
///
/// ## Example Config File Section
/// ```toml
/// [pricing]
/// discount_rate = 1000
/// tax_rate = 700
/// service_charge_rate = 1000
/// quantity_policy = "stamp_copy"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_discount_rate")]
    pub discount_rate: Rate,

    #[serde(default = "default_tax_rate")]
    pub tax_rate: Rate,

    #[serde(default = "default_service_charge_rate")]
    pub service_charge_rate: Rate,

    #[serde(default)]
    pub quantity_policy: QuantityPolicy,
}

fn default_discount_rate() -> Rate {
    DEFAULT_DISCOUNT_RATE
}

fn default_tax_rate() -> Rate {
    DEFAULT_TAX_RATE
}

fn default_service_charge_rate() -> Rate {
    DEFAULT_SERVICE_CHARGE_RATE
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            discount_rate: DEFAULT_DISCOUNT_RATE,
            tax_rate: DEFAULT_TAX_RATE,
            service_charge_rate: DEFAULT_SERVICE_CHARGE_RATE,
            quantity_policy: QuantityPolicy::default(),
        }
    }
}

impl PricingConfig {
    /// Checks every rate is within 0-100%.
    pub fn validate(&self) -> CoreResult<()> {
        validate_rate("discount_rate", self.discount_rate)?;
        validate_rate("tax_rate", self.tax_rate)?;
        validate_rate("service_charge_rate", self.service_charge_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.discount_rate.bps(), 1000);
        assert_eq!(config.tax_rate.bps(), 700);
        assert_eq!(config.service_charge_rate.bps(), 1000);
        assert_eq!(config.quantity_policy, QuantityPolicy::StampCopy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: PricingConfig = serde_json::from_str(r#"{ "tax_rate": 900 }"#).unwrap();
        assert_eq!(config.tax_rate.bps(), 900);
        assert_eq!(config.discount_rate, DEFAULT_DISCOUNT_RATE);
        assert_eq!(config.quantity_policy, QuantityPolicy::StampCopy);
    }

    #[test]
    fn test_validate_rejects_rates_above_hundred_percent() {
        let config = PricingConfig {
            tax_rate: Rate::from_bps(12000),
            ..PricingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_quantity_policy_parsing() {
        assert_eq!("copy".parse::<QuantityPolicy>().unwrap(), QuantityPolicy::StampCopy);
        assert_eq!(
            "STAMP_SOURCE".parse::<QuantityPolicy>().unwrap(),
            QuantityPolicy::StampSource
        );
        assert!("sideways".parse::<QuantityPolicy>().is_err());
        assert_eq!(QuantityPolicy::StampSource.to_string(), "stamp_source");
    }
}
