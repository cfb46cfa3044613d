//! # Menu Bundles
//!
//! A bundle is a promotional package sold at one flat price. Its children
//! describe what is in the package; they never add to the bundle's price.
//!
//! ## Copy Semantics
//! ```text
//! original.children ──► [ Rc(A), Rc(B) ]
//!                            │      │
//! copy.children ────────► [ Rc(A), Rc(B) ]   new Vec, same A and B
//!
//! copy.remove_child(0)   → original still has A
//! A.borrow_mut()...     → visible through both bundles
//! ```

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::component::{checked_index, MenuComponent, PrintMode, SharedComponent};
use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price};

/// Sentinel returned by [`MenuBundle::position_or_sentinel`] when no child matches.
pub const NOT_FOUND: i64 = -1;

/// A flat-priced package of menu components.
///
/// ## Equality
/// Two bundles are equal when their names and prices are equal. Children,
/// quantity, code and description are ignored; catalog de-duplication relies
/// on exactly this.
#[derive(Debug)]
pub struct MenuBundle {
    code: u32,
    name: String,
    description: String,
    price: Money,
    quantity: u32,
    children: Vec<SharedComponent>,
}

impl MenuBundle {
    pub fn new(
        code: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        Ok(MenuBundle {
            code,
            name,
            description: description.into(),
            price,
            quantity: 0,
            children: Vec::new(),
        })
    }

    /// Copies code, name, description and price into a new bundle whose
    /// child list is a new `Vec` holding the SAME child handles.
    ///
    /// The quantity is not carried over; the copy starts at 0.
    pub fn shallow_copy(&self) -> MenuBundle {
        MenuBundle {
            code: self.code,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: 0,
            children: self.children.iter().map(Rc::clone).collect(),
        }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn set_price(&mut self, price: Money) -> CoreResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// `price × quantity`. Children are not priced.
    pub fn total_price(&self) -> Money {
        self.price * self.quantity
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Returns the child handle at `index`.
    ///
    /// ## Errors
    /// `CoreError::OutOfRange` when `index < 0` or `index >= children_count()`.
    pub fn get_child(&self, index: i64) -> CoreResult<SharedComponent> {
        let i = checked_index(index, self.children.len())?;
        Ok(Rc::clone(&self.children[i]))
    }

    /// Removes and returns the child at `index`; nothing changes on error.
    pub fn remove_child(&mut self, index: i64) -> CoreResult<SharedComponent> {
        let i = checked_index(index, self.children.len())?;
        let removed = self.children.remove(i);
        debug!(bundle = self.code, index = i, "Removed bundle child");
        Ok(removed)
    }

    /// Appends a component. Duplicate codes are allowed.
    pub fn add_child(&mut self, child: impl Into<MenuComponent>) {
        self.add_shared_child(child.into().into_shared());
    }

    /// Appends an existing handle, sharing it with whoever else holds it.
    ///
    /// The handle may be the bundle's own cell; its code is then not readable
    /// while the caller holds the mutable borrow and is logged as `None`.
    pub fn add_shared_child(&mut self, child: SharedComponent) {
        let child_code = child.try_borrow().map(|c| c.code()).ok();
        debug!(bundle = self.code, child = ?child_code, "Added bundle child");
        self.children.push(child);
    }

    pub fn children_count(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> &[SharedComponent] {
        &self.children
    }

    /// Index of the first child with `code`, if any.
    pub fn contains(&self, code: u32) -> Option<usize> {
        self.children.iter().position(|c| c.borrow().code() == code)
    }

    /// Like [`MenuBundle::contains`], but returns [`NOT_FOUND`] (`-1`) when
    /// nothing matches.
    pub fn position_or_sentinel(&self, code: u32) -> i64 {
        self.contains(code)
            .and_then(|i| i64::try_from(i).ok())
            .unwrap_or(NOT_FOUND)
    }

    pub fn display(&self, mode: PrintMode) -> BundleDisplay<'_> {
        BundleDisplay { bundle: self, mode }
    }
}

impl PartialEq for MenuBundle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.price == other.price
    }
}

/// Rendering of a [`MenuBundle`].
///
/// - `Invoice`: `qty\tname\ttotal`, then `\tchild` per child
/// - `Browse`: `code\tname` per child, no bundle line, no prices
pub struct BundleDisplay<'a> {
    bundle: &'a MenuBundle,
    mode: PrintMode,
}

impl fmt::Display for BundleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bundle = self.bundle;
        match self.mode {
            PrintMode::Invoice => {
                write!(
                    f,
                    "{}\t{}\t{}",
                    bundle.quantity,
                    bundle.name,
                    bundle.total_price()
                )?;
                for child in &bundle.children {
                    write!(f, "\n\t{}", child.borrow().name())?;
                }
            }
            PrintMode::Browse => {
                for (i, child) in bundle.children.iter().enumerate() {
                    let child = child.borrow();
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{:04}\t{}", child.code(), child.name())?;
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
