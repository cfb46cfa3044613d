//! # bistro-core: Restaurant Menu and Order Logic
//!
//! Pure domain logic for a small table-service restaurant: a catalog of
//! items and promotional bundles, and orders that are priced and invoiced.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    bistro-cli                                   │   │
//! │  │    config ──► logging ──► catalog ──► order ──► stdout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │ component │  │  bundle   │  │   menu    │  │   order   │   │   │
//! │  │   │ MenuLeaf  │  │MenuBundle │  │   Menu    │  │  Order    │   │   │
//! │  │   │ Component │  │ children  │  │  entries  │  │  Invoice  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   money • types • config • validation • error                   │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`component`] - `MenuComponent` sum type and `MenuLeaf`
//! - [`bundle`] - `MenuBundle` with shared children
//! - [`menu`] - `Menu`, the catalog / order contents
//! - [`order`] - `Order`, `OrderBuilder`, `Invoice`
//! - [`money`] - exact decimal `Money`
//! - [`types`] - `Rate`, `Reservation`, `Staff`
//! - [`config`] - `PricingConfig`, `QuantityPolicy`
//! - [`validation`] - input rules
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{Menu, MenuLeaf, Money, Order, Reservation, Staff};
//! use std::rc::Rc;
//!
//! let mut catalog = Menu::new("Dinner", "");
//! catalog.add_child(MenuLeaf::new(101, "Noodles", "", Money::from_cents(1000))?);
//!
//! let mut order = Order::builder()
//!     .reservation(Reservation::new(12).shared())
//!     .staff(Rc::new(Staff::new(7, "Ahmad")))
//!     .build()?;
//!
//! order.add_item(catalog.get_child_mut(0)?, 2)?;
//!
//! let invoice = order.print_invoice(true).expect("first invoice");
//! assert_eq!(invoice.grand_total.to_string(), "21.19");
//! assert!(order.print_invoice(true).is_none());
//! # Ok::<(), bistro_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bundle;
pub mod component;
pub mod config;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bundle::{MenuBundle, NOT_FOUND};
pub use component::{MenuComponent, MenuLeaf, PrintMode, SharedComponent};
pub use config::{PricingConfig, QuantityPolicy};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::Menu;
pub use money::Money;
pub use order::{Invoice, InvoiceSummary, Order, OrderBuilder};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line on an order.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
pub const MAX_ITEM_QUANTITY: i64 = 999;
