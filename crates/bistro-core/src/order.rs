//! # Orders
//!
//! An order is opened from a reservation, collects copies of menu entries and
//! is closed by printing its invoice exactly once.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  OrderBuilder::build()                                                  │
//! │        │  stamps reservation.time = now                                 │
//! │        ▼                                                                │
//! │   ┌─────────┐  add_item() / print()        ┌──────────┐                 │
//! │   │  OPEN   │ ───────────────────────────► │  OPEN    │                 │
//! │   │ active  │                              │          │                 │
//! │   └────┬────┘                              └──────────┘                 │
//! │        │ print_invoice() - first call                                   │
//! │        ▼                                                                │
//! │   ┌─────────┐  print_invoice() again → None, nothing changes            │
//! │   │ CLOSED  │                                                           │
//! │   └─────────┘  (terminal)                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invoice Arithmetic
//! ```text
//! subtotal          = Σ line.total_price
//! discount          = subtotal × discount_rate          (members only)
//! subtotal'         = subtotal - discount
//! service charge    = subtotal' × service_charge_rate
//! tax               = (subtotal' + service charge) × tax_rate
//! TOTAL             = subtotal' + service charge + tax
//! ```
//! With the default 10% service charge the tax line is `subtotal' × 1.1 × tax_rate`.
//! Nothing is rounded until the figures are displayed.
//!
//! ## Concurrency
//! An order is a single-owner value (`Rc` handles, no locks). A multi-request
//! front end must serialize `add_item` / `print_invoice` per order itself.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::component::{MenuComponent, PrintMode};
use crate::config::{PricingConfig, QuantityPolicy};
use crate::error::{CoreError, CoreResult};
use crate::menu::{Menu, MenuListing};
use crate::money::Money;
use crate::types::{Rate, SharedReservation, Staff};
use crate::validation::{validate_quantity, validate_rate};

/// First line of every receipt.
pub const RECEIPT_TITLE: &str = "Restaurant 0.0";

const RULE: &str = "--------------------------------------";

// =============================================================================
// Builder
// =============================================================================

/// Collects what an [`Order`] needs before it is opened.
///
/// ## Example
/// ```rust
/// use bistro_core::{Order, Reservation, Staff};
/// use std::rc::Rc;
///
/// let order = Order::builder()
///     .reservation(Reservation::new(7).shared())
///     .staff(Rc::new(Staff::new(3, "Mei")))
///     .build()?;
/// assert!(order.is_active());
/// assert_eq!(order.table_id(), 7);
/// # Ok::<(), bistro_core::CoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct OrderBuilder {
    reservation: Option<SharedReservation>,
    staff: Option<Rc<Staff>>,
    pricing: PricingConfig,
    opened_at: Option<NaiveDateTime>,
}

impl OrderBuilder {
    pub fn reservation(mut self, reservation: SharedReservation) -> Self {
        self.reservation = Some(reservation);
        self
    }

    pub fn staff(mut self, staff: Rc<Staff>) -> Self {
        self.staff = Some(staff);
        self
    }

    pub fn pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    /// Fixes the opening time instead of reading the clock.
    pub fn opened_at(mut self, at: NaiveDateTime) -> Self {
        self.opened_at = Some(at);
        self
    }

    /// Opens the order and stamps the reservation's time.
    ///
    /// ## Errors
    /// - `CoreError::InvalidArgument` if the reservation or staff is missing
    /// - `CoreError::Validation` if a pricing rate is above 100%
    pub fn build(self) -> CoreResult<Order> {
        let reservation = self.reservation.ok_or_else(|| CoreError::InvalidArgument {
            field: "reservation".to_string(),
        })?;
        let staff = self.staff.ok_or_else(|| CoreError::InvalidArgument {
            field: "staff".to_string(),
        })?;
        self.pricing.validate()?;

        let opened_at = self
            .opened_at
            .unwrap_or_else(|| Local::now().naive_local());
        reservation.borrow_mut().time = Some(opened_at);

        let order = Order {
            id: Uuid::new_v4(),
            items: Menu::new(opened_at.format("%Y-%m-%dT%H:%M:%S%.f").to_string(), ""),
            reservation,
            staff,
            pricing: self.pricing,
            opened_at,
            active: true,
            total_price: Money::zero(),
        };

        info!(
            order_id = %order.id,
            table = order.table_id(),
            staff = order.staff_id(),
            "Order opened"
        );
        Ok(order)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A table's order: selected items, pricing and the one-shot invoice.
#[derive(Debug)]
pub struct Order {
    id: Uuid,
    items: Menu,
    reservation: SharedReservation,
    staff: Rc<Staff>,
    pricing: PricingConfig,
    opened_at: NaiveDateTime,
    active: bool,
    total_price: Money,
}

impl Order {
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// `true` until the invoice has been printed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The figure computed by the last `print()`; discounted after a member
    /// invoice.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn staff_id(&self) -> u32 {
        self.staff.id()
    }

    pub fn staff(&self) -> &Staff {
        &self.staff
    }

    pub fn table_id(&self) -> u32 {
        self.reservation.borrow().table_id
    }

    pub fn reservation(&self) -> &SharedReservation {
        &self.reservation
    }

    pub fn opened_at(&self) -> NaiveDateTime {
        self.opened_at
    }

    /// The order's own copies of the selected entries.
    pub fn menu(&self) -> &Menu {
        &self.items
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    pub fn set_discount_rate(&mut self, rate: Rate) -> CoreResult<()> {
        validate_rate("discount_rate", rate)?;
        self.pricing.discount_rate = rate;
        Ok(())
    }

    pub fn set_tax_rate(&mut self, rate: Rate) -> CoreResult<()> {
        validate_rate("tax_rate", rate)?;
        self.pricing.tax_rate = rate;
        Ok(())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds a copy of `item` to the order.
    ///
    /// Which object ends up with `quantity` depends on
    /// [`PricingConfig::quantity_policy`]:
    /// - `StampCopy`: the copy inside the order; `item` is left alone
    /// - `StampSource`: `item` itself; the copy keeps the quantity it had when
    ///   copied (bundle copies always start at 0)
    pub fn add_item(&mut self, item: &mut MenuComponent, quantity: u32) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if !self.active {
            warn!(order_id = %self.id, code = item.code(), "Adding item to a closed order");
        }

        let mut line = item.duplicate();
        match self.pricing.quantity_policy {
            QuantityPolicy::StampCopy => line.set_quantity(quantity),
            QuantityPolicy::StampSource => item.set_quantity(quantity),
        }

        debug!(
            order_id = %self.id,
            code = line.code(),
            kind = line.kind(),
            quantity,
            policy = %self.pricing.quantity_policy,
            "Item added to order"
        );
        self.items.add_child(line);
        Ok(())
    }

    /// Recomputes `total_price` and renders the receipt body: header, one
    /// block per line in insertion order, and the sub-total.
    pub fn print(&mut self) -> String {
        self.total_price = self.items.total_price();
        ReceiptBody { order: self }.to_string()
    }

    /// Prints the invoice and closes the order.
    ///
    /// Returns `None` when the order is already closed; nothing is rendered
    /// and `total_price` is left as it was.
    pub fn print_invoice(&mut self, is_member: bool) -> Option<Invoice> {
        if !self.active {
            debug!(order_id = %self.id, "Invoice already printed, ignoring");
            return None;
        }
        self.active = false;

        let receipt = self.print();
        let subtotal = self.total_price;

        let discount = is_member.then(|| subtotal.apply_rate(self.pricing.discount_rate));
        if let Some(discount) = discount {
            self.total_price -= discount;
        }

        let discounted_subtotal = self.total_price;
        let service_charge = discounted_subtotal.apply_rate(self.pricing.service_charge_rate);
        let tax = (discounted_subtotal + service_charge).apply_rate(self.pricing.tax_rate);
        let grand_total = discounted_subtotal + service_charge + tax;

        info!(
            order_id = %self.id,
            member = is_member,
            subtotal = %subtotal,
            total = %grand_total,
            "Invoice printed, order closed"
        );

        Some(Invoice {
            order_id: self.id,
            table_id: self.table_id(),
            staff_id: self.staff_id(),
            receipt,
            lines: self.items.listing(),
            subtotal,
            discount,
            discounted_subtotal,
            service_charge,
            tax,
            grand_total,
        })
    }
}

/// Header, item lines and sub-total.
struct ReceiptBody<'a> {
    order: &'a Order,
}

impl fmt::Display for ReceiptBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.order;
        let time = order
            .reservation
            .borrow()
            .time
            .unwrap_or(order.opened_at);

        writeln!(f, "{}", RECEIPT_TITLE)?;
        writeln!(f, "Server:{}\t\tTable:{}", order.staff_id(), order.table_id())?;
        writeln!(f, "Time:{}", time.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "{}", RULE)?;
        for line in &order.items {
            writeln!(f, "{}", line.display(PrintMode::Invoice))?;
        }
        writeln!(f, "{}", RULE)?;
        writeln!(f, "\t\tSub-Total:\t{}", order.total_price)
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// The result of the one successful `print_invoice` call.
///
/// `Display` renders the full receipt text.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub order_id: Uuid,
    pub table_id: u32,
    pub staff_id: u32,
    receipt: String,
    pub lines: Vec<MenuListing>,
    pub subtotal: Money,
    /// Present for members only.
    pub discount: Option<Money>,
    pub discounted_subtotal: Money,
    pub service_charge: Money,
    pub tax: Money,
    pub grand_total: Money,
}

impl Invoice {
    /// Machine-readable copy of the figures.
    pub fn summary(&self) -> InvoiceSummary {
        InvoiceSummary {
            order_id: self.order_id.to_string(),
            table_id: self.table_id,
            staff_id: self.staff_id,
            lines: self.lines.clone(),
            subtotal: self.subtotal,
            discount: self.discount,
            service_charge: self.service_charge,
            tax: self.tax,
            grand_total: self.grand_total,
        }
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.receipt)?;
        if let Some(discount) = self.discount {
            writeln!(f, "Membership discount:\t{}", discount)?;
        }
        writeln!(f, "\t\tService Charge:\t{}", self.service_charge)?;
        writeln!(f, "\t\tTax:\t{}", self.tax)?;
        writeln!(f, "\t\tTOTAL:\t{}", self.grand_total)
    }
}

/// Invoice figures for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub order_id: String,
    pub table_id: u32,
    pub staff_id: u32,
    pub lines: Vec<MenuListing>,
    pub subtotal: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Money>,
    pub service_charge: Money,
    pub tax: Money,
    pub grand_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
