//! # Menu
//!
//! An ordered list of menu components. The same type serves as the
//! restaurant catalog and as the contents of an order.

use serde::Serialize;
use std::fmt;

use crate::component::{checked_index, MenuComponent, PrintMode};
use crate::error::CoreResult;
use crate::money::Money;

/// Ordered collection of items and bundles.
///
/// Insertion order is display order. Codes are not required to be unique;
/// lookups by code return the first match.
#[derive(Debug, Default)]
pub struct Menu {
    name: String,
    description: String,
    entries: Vec<MenuComponent>,
}

impl Menu {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Menu {
            name: name.into(),
            description: description.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn add_child(&mut self, entry: impl Into<MenuComponent>) {
        self.entries.push(entry.into());
    }

    /// ## Errors
    /// `CoreError::OutOfRange` when `index` is outside `[0, children_count())`.
    pub fn get_child(&self, index: i64) -> CoreResult<&MenuComponent> {
        let i = checked_index(index, self.entries.len())?;
        Ok(&self.entries[i])
    }

    pub fn get_child_mut(&mut self, index: i64) -> CoreResult<&mut MenuComponent> {
        let i = checked_index(index, self.entries.len())?;
        Ok(&mut self.entries[i])
    }

    pub fn remove_child(&mut self, index: i64) -> CoreResult<MenuComponent> {
        let i = checked_index(index, self.entries.len())?;
        Ok(self.entries.remove(i))
    }

    pub fn children_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuComponent> {
        self.entries.iter()
    }

    /// First entry with `code`.
    pub fn find(&self, code: u32) -> Option<&MenuComponent> {
        self.entries.iter().find(|e| e.code() == code)
    }

    pub fn find_mut(&mut self, code: u32) -> Option<&mut MenuComponent> {
        self.entries.iter_mut().find(|e| e.code() == code)
    }

    /// Sum of every entry's `total_price`.
    pub fn total_price(&self) -> Money {
        self.entries.iter().map(MenuComponent::total_price).sum()
    }

    /// Browsing view of the whole menu.
    pub fn display(&self) -> MenuDisplay<'_> {
        MenuDisplay { menu: self }
    }

    /// Lightweight listing for JSON output.
    pub fn listing(&self) -> Vec<MenuListing> {
        self.entries
            .iter()
            .map(|e| MenuListing {
                code: e.code(),
                name: e.name().to_string(),
                kind: e.kind(),
                quantity: e.quantity(),
                total_price: e.total_price(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a MenuComponent;
    type IntoIter = std::slice::Iter<'a, MenuComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One row of [`Menu::listing`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuListing {
    pub code: u32,
    pub name: String,
    pub kind: &'static str,
    pub quantity: u32,
    pub total_price: Money,
}

/// Catalog listing: one `code\tname` line per entry, bundle contents
/// indented beneath their bundle.
pub struct MenuDisplay<'a> {
    menu: &'a Menu,
}

impl fmt::Display for MenuDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.menu.entries {
            writeln!(f, "{:04}\t{}", entry.code(), entry.name())?;
            if let MenuComponent::Bundle(bundle) = entry {
                for child in bundle.children() {
                    let child = child.borrow();
                    writeln!(f, "\t{}", child.display(PrintMode::Browse))?;
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::MenuBundle;
    use crate::component::MenuLeaf;
    use crate::error::CoreError;

    fn catalog() -> Menu {
        let mut menu = Menu::new("Lunch", "Weekday lunch menu");
        menu.add_child(MenuLeaf::new(101, "Chicken Rice", "", Money::from_cents(550)).unwrap());
        menu.add_child(MenuLeaf::new(201, "Lime Juice", "", Money::from_cents(250)).unwrap());

        let mut set = MenuBundle::new(500, "Set Lunch", "", Money::from_cents(700)).unwrap();
        set.add_child(MenuLeaf::new(101, "Chicken Rice", "", Money::from_cents(550)).unwrap());
        set.add_child(MenuLeaf::new(201, "Lime Juice", "", Money::from_cents(250)).unwrap());
        menu.add_child(set);
        menu
    }

    #[test]
    fn test_index_access_is_bounds_checked() {
        let mut menu = catalog();
        assert_eq!(menu.children_count(), 3);
        assert_eq!(menu.get_child(2).unwrap().code(), 500);
        assert_eq!(
            menu.get_child(3).unwrap_err(),
            CoreError::OutOfRange { index: 3, len: 3 }
        );
        assert!(menu.get_child(-1).is_err());
        assert!(menu.remove_child(10).is_err());
        assert_eq!(menu.children_count(), 3);

        let removed = menu.remove_child(0).unwrap();
        assert_eq!(removed.code(), 101);
        assert_eq!(menu.get_child(0).unwrap().code(), 201);
    }

    #[test]
    fn test_find_by_code() {
        let mut menu = catalog();
        assert_eq!(menu.find(500).map(MenuComponent::kind), Some("bundle"));
        assert!(menu.find(404).is_none());

        menu.find_mut(201).unwrap().set_quantity(3);
        assert_eq!(menu.get_child(1).unwrap().quantity(), 3);
    }

    #[test]
    fn test_total_price_sums_entries() {
        let mut menu = catalog();
        menu.get_child_mut(0).unwrap().set_quantity(2); // 11.00
        menu.get_child_mut(2).unwrap().set_quantity(1); // 7.00
        assert_eq!(menu.total_price(), Money::from_cents(1800));
    }

    #[test]
    fn test_browse_display() {
        let menu = catalog();
        assert_eq!(
            menu.display().to_string(),
            "0101\tChicken Rice\n\
             0201\tLime Juice\n\
             0500\tSet Lunch\n\
             \t0101\tChicken Rice\n\
             \t0201\tLime Juice\n"
        );
    }

    #[test]
    fn test_listing_serializes_camel_case() {
        let menu = catalog();
        let json = serde_json::to_value(menu.listing()).unwrap();
        assert_eq!(json[2]["kind"], "bundle");
        assert_eq!(json[0]["code"], 101);
        assert!(json[0].get("totalPrice").is_some());
    }
}
