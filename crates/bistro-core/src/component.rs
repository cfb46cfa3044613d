//! # Menu Components
//!
//! The catalog is a composite: every entry is either a single item
//! ([`MenuLeaf`]) or a promotional package ([`MenuBundle`]).
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuComponent                                                          │
//! │  ├── Leaf(MenuLeaf)       price × quantity                              │
//! │  └── Bundle(MenuBundle)   flat price × quantity                         │
//! │        └── children: Vec<SharedComponent>   (display only)              │
//! │                                                                         │
//! │  SharedComponent = Rc<RefCell<MenuComponent>>                           │
//! │  A bundle copy shares its children with the original.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering never writes anywhere; [`MenuComponent::display`] returns a
//! value implementing `Display`.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::bundle::MenuBundle;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price};

/// A component handle that several bundles may hold at once.
pub type SharedComponent = Rc<RefCell<MenuComponent>>;

/// How a component is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// Receipt line: `quantity<TAB>name<TAB>total`.
    Invoice,
    /// Catalog browsing: `code<TAB>name`, no prices.
    Browse,
}

/// Converts a caller-supplied index into a position inside `[0, len)`.
pub(crate) fn checked_index(index: i64, len: usize) -> CoreResult<usize> {
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(CoreError::OutOfRange { index, len }),
    }
}

// =============================================================================
// Menu Leaf
// =============================================================================

/// A single sellable item.
///
/// `Clone` yields an independent copy; nothing is shared.
///
/// ## Example
/// ```rust
/// use bistro_core::component::MenuLeaf;
/// use bistro_core::money::Money;
///
/// let mut laksa = MenuLeaf::new(101, "Laksa", "Spicy noodle soup", Money::from_cents(850))?;
/// laksa.set_quantity(2);
/// assert_eq!(laksa.total_price(), Money::from_cents(1700));
/// assert_eq!(laksa.to_string(), "2\tLaksa\t17.00");
/// # Ok::<(), bistro_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLeaf {
    code: u32,
    name: String,
    description: String,
    price: Money,
    #[serde(default)]
    quantity: u32,
}

impl MenuLeaf {
    pub fn new(
        code: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        Ok(MenuLeaf {
            code,
            name,
            description: description.into(),
            price,
            quantity: 0,
        })
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

    /// Unit price.
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

    /// `price × quantity`, unrounded.
    pub fn total_price(&self) -> Money {
        self.price * self.quantity
    }
}

/// Receipt line.
impl fmt::Display for MenuLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.quantity, self.name, self.total_price())
    }
}

// =============================================================================
// Menu Component
// =============================================================================

/// A catalog entry: an item or a bundle.
#[derive(Debug)]
pub enum MenuComponent {
    Leaf(MenuLeaf),
    Bundle(MenuBundle),
}

impl MenuComponent {
    pub fn code(&self) -> u32 {
        match self {
            MenuComponent::Leaf(leaf) => leaf.code(),
            MenuComponent::Bundle(bundle) => bundle.code(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MenuComponent::Leaf(leaf) => leaf.name(),
            MenuComponent::Bundle(bundle) => bundle.name(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            MenuComponent::Leaf(leaf) => leaf.description(),
            MenuComponent::Bundle(bundle) => bundle.description(),
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            MenuComponent::Leaf(leaf) => leaf.quantity(),
            MenuComponent::Bundle(bundle) => bundle.quantity(),
        }
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        match self {
            MenuComponent::Leaf(leaf) => leaf.set_quantity(quantity),
            MenuComponent::Bundle(bundle) => bundle.set_quantity(quantity),
        }
    }

    pub fn total_price(&self) -> Money {
        match self {
            MenuComponent::Leaf(leaf) => leaf.total_price(),
            MenuComponent::Bundle(bundle) => bundle.total_price(),
        }
    }

    /// `"item"` or `"bundle"`.
    pub fn kind(&self) -> &'static str {
        match self {
            MenuComponent::Leaf(_) => "item",
            MenuComponent::Bundle(_) => "bundle",
        }
    }

    pub fn as_leaf(&self) -> CoreResult<&MenuLeaf> {
        match self {
            MenuComponent::Leaf(leaf) => Ok(leaf),
            other => Err(other.mismatch("item")),
        }
    }

    pub fn as_bundle(&self) -> CoreResult<&MenuBundle> {
        match self {
            MenuComponent::Bundle(bundle) => Ok(bundle),
            other => Err(other.mismatch("bundle")),
        }
    }

    pub fn as_bundle_mut(&mut self) -> CoreResult<&mut MenuBundle> {
        match self {
            MenuComponent::Bundle(bundle) => Ok(bundle),
            other => Err(other.mismatch("bundle")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> CoreError {
        CoreError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Copies the component for placement in an order.
    ///
    /// Items are copied in full. Bundles go through
    /// [`MenuBundle::shallow_copy`], so the copy shares children and starts
    /// with quantity 0.
    pub fn duplicate(&self) -> MenuComponent {
        match self {
            MenuComponent::Leaf(leaf) => MenuComponent::Leaf(leaf.clone()),
            MenuComponent::Bundle(bundle) => MenuComponent::Bundle(bundle.shallow_copy()),
        }
    }

    /// Wraps the component so bundles can share it.
    pub fn into_shared(self) -> SharedComponent {
        Rc::new(RefCell::new(self))
    }

    pub fn display(&self, mode: PrintMode) -> ComponentDisplay<'_> {
        ComponentDisplay {
            component: self,
            mode,
        }
    }
}

impl From<MenuLeaf> for MenuComponent {
    fn from(leaf: MenuLeaf) -> Self {
        MenuComponent::Leaf(leaf)
    }
}

impl From<MenuBundle> for MenuComponent {
    fn from(bundle: MenuBundle) -> Self {
        MenuComponent::Bundle(bundle)
    }
}

/// Rendering of a [`MenuComponent`] in a given [`PrintMode`].
pub struct ComponentDisplay<'a> {
    component: &'a MenuComponent,
    mode: PrintMode,
}

impl fmt::Display for ComponentDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.component, self.mode) {
            (MenuComponent::Leaf(leaf), PrintMode::Invoice) => write!(f, "{}", leaf),
            (MenuComponent::Leaf(leaf), PrintMode::Browse) => {
                write!(f, "{:04}\t{}", leaf.code(), leaf.name())
            }
            (MenuComponent::Bundle(bundle), mode) => write!(f, "{}", bundle.display(mode)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn leaf(code: u32, name: &str, cents: i64) -> MenuLeaf {
        MenuLeaf::new(code, name, "", Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_leaf_total_is_price_times_quantity() {
        let mut item = leaf(1, "Teh Tarik", 180);
        assert_eq!(item.total_price(), Money::zero());

        for qty in [0u32, 1, 3, 999] {
            item.set_quantity(qty);
            assert_eq!(item.total_price(), Money::from_cents(180 * i64::from(qty)));
        }
    }

    #[test]
    fn test_leaf_total_keeps_sub_cent_precision() {
        let mut item = MenuLeaf::new(
            2,
            "Kopi",
            "",
            Money::from_decimal(rust_decimal::Decimal::new(1333, 3)),
        )
        .unwrap();
        item.set_quantity(3);
        assert_eq!(item.total_price().amount(), rust_decimal::Decimal::new(3999, 3));
        assert_eq!(item.to_string(), "3\tKopi\t4.00");
    }

    #[test]
    fn test_leaf_rejects_bad_input() {
        assert_eq!(
            MenuLeaf::new(1, "", "", Money::zero()).unwrap_err(),
            CoreError::Validation(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(MenuLeaf::new(1, "Ice", "", Money::from_cents(-5)).is_err());

        let mut item = leaf(1, "Ice", 0);
        assert!(item.set_price(Money::from_cents(-1)).is_err());
        assert_eq!(item.price(), Money::zero());
    }

    #[test]
    fn test_leaf_rejects_price_that_could_overflow_totals() {
        let huge = Money::from_decimal(rust_decimal::Decimal::MAX);
        assert!(matches!(
            MenuLeaf::new(1, "Caviar", "", huge),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));

        let mut item = leaf(1, "Caviar", 100);
        assert!(item.set_price(huge).is_err());

        // The largest accepted price still totals at the largest quantity
        item.set_price(Money::from_cents(crate::validation::MAX_PRICE_CENTS)).unwrap();
        item.set_quantity(u32::MAX);
        assert!(!item.total_price().is_negative());
    }

    #[test]
    fn test_leaf_clone_is_independent() {
        let mut original = leaf(7, "Satay", 120);
        original.set_quantity(10);

        let mut copy = original.clone();
        copy.set_quantity(1);
        copy.set_price(Money::from_cents(999)).unwrap();

        assert_eq!(original.quantity(), 10);
        assert_eq!(original.price(), Money::from_cents(120));
        assert_eq!(copy.code(), 7);
    }

    #[test]
    fn test_component_dispatch() {
        let mut component = MenuComponent::from(leaf(42, "Otah", 300));
        component.set_quantity(2);

        assert_eq!(component.code(), 42);
        assert_eq!(component.name(), "Otah");
        assert_eq!(component.kind(), "item");
        assert_eq!(component.total_price(), Money::from_cents(600));
        assert_eq!(component.display(PrintMode::Invoice).to_string(), "2\tOtah\t6.00");
        assert_eq!(component.display(PrintMode::Browse).to_string(), "0042\tOtah");
    }

    #[test]
    fn test_variant_access_reports_type_mismatch() {
        let mut component = MenuComponent::from(leaf(1, "Rojak", 500));
        assert!(component.as_leaf().is_ok());
        assert_eq!(
            component.as_bundle_mut().unwrap_err(),
            CoreError::TypeMismatch {
                expected: "bundle",
                found: "item"
            }
        );
    }

    #[test]
    fn test_checked_index() {
        assert_eq!(checked_index(0, 2), Ok(0));
        assert_eq!(checked_index(1, 2), Ok(1));
        assert_eq!(checked_index(2, 2), Err(CoreError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(checked_index(-1, 2), Err(CoreError::OutOfRange { index: -1, len: 2 }));
        assert!(checked_index(0, 0).is_err());
    }
}
