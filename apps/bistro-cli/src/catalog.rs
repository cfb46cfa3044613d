//! # Demo Catalog
//!
//! The house menu the CLI serves from.
//!
//! ## Layout
//! - 1xx: mains
//! - 2xx: drinks
//! - 9xx: bundles built from the dishes above
//!
//! Bundles that list the same dish hold the same handle; the top-level dish
//! entries are independent copies.

use bistro_core::{CoreResult, Menu, MenuBundle, MenuComponent, MenuLeaf, Money, SharedComponent};

/// `(code, name, description, price_cents)`
const DISHES: &[(u32, &str, &str, i64)] = &[
    (101, "Hainanese Chicken Rice", "Poached chicken, fragrant rice", 650),
    (102, "Char Kway Teow", "Wok-fried flat noodles", 700),
    (103, "Laksa", "Coconut curry noodle soup", 800),
    (201, "Teh Tarik", "Pulled milk tea", 250),
    (202, "Lime Juice", "Fresh calamansi", 300),
];

/// `(code, name, description, price_cents, child codes)`
const BUNDLES: &[(u32, &str, &str, i64, &[u32])] = &[
    (900, "Lunch Set", "Chicken rice with lime juice", 850, &[101, 202]),
    (901, "Noodle Duo", "Two noodle dishes and a juice", 1600, &[102, 103, 202]),
];

/// Builds the catalog: dishes first, then bundles.
pub fn seed() -> CoreResult<Menu> {
    let mut shared: Vec<SharedComponent> = Vec::with_capacity(DISHES.len());
    for &(code, name, description, cents) in DISHES {
        let leaf = MenuLeaf::new(code, name, description, Money::from_cents(cents))?;
        shared.push(MenuComponent::from(leaf).into_shared());
    }

    let mut menu = Menu::new("House Menu", "Served all day");
    for dish in &shared {
        menu.add_child(dish.borrow().duplicate());
    }

    for &(code, name, description, cents, children) in BUNDLES {
        let mut bundle = MenuBundle::new(code, name, description, Money::from_cents(cents))?;
        for child_code in children {
            if let Some(child) = shared.iter().find(|d| d.borrow().code() == *child_code) {
                bundle.add_shared_child(child.clone());
            }
        }
        menu.add_child(bundle);
    }

    Ok(menu)
}
