//! # Domain Types
//!
//! Small value types and the two collaborators an order consumes.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Rate       │   │   Reservation   │   │      Staff      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  table_id       │   │  id             │       │
//! │  │  1000 = 10%     │   │  time (stamped) │   │  name           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Reservation and Staff are created by the booking / HR side and only   │
//! │  REFERENCED by an order (shared handles, never owned).                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 700 bps = 7% (GST), 1000 bps = 10% (member discount, service charge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (`700` → `0.07`).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// A table booking. Orders stamp `time` when they are opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Table the party is seated at.
    pub table_id: u32,

    /// Booking time; overwritten with the opening time of the order.
    pub time: Option<NaiveDateTime>,
}

impl Reservation {
    pub fn new(table_id: u32) -> Self {
        Reservation {
            table_id,
            time: None,
        }
    }

    /// Wraps the reservation in the shared handle orders expect.
    pub fn shared(self) -> SharedReservation {
        Rc::new(RefCell::new(self))
    }
}

/// Reservation handle shared between the booking side and an order.
pub type SharedReservation = Rc<RefCell<Reservation>>;

// =============================================================================
// Staff
// =============================================================================

/// The server responsible for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: u32,
    pub name: String,
}

impl Staff {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Staff {
            id,
            name: name.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(700);
        assert_eq!(rate.bps(), 700);
        assert_eq!(rate.as_decimal(), Decimal::new(7, 2));
    }

    #[test]
    fn test_rate_default_is_zero() {
        assert!(Rate::default().is_zero());
    }

    #[test]
    fn test_shared_reservation_is_visible_to_all_holders() {
        let booking = Reservation::new(12).shared();
        let held_by_order = Rc::clone(&booking);

        let stamp = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(19, 30, 0));
        held_by_order.borrow_mut().time = stamp;

        assert_eq!(booking.borrow().time, stamp);
    }
}
