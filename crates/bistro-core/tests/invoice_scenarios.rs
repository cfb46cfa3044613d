//! End-to-end scenarios: catalog → order → invoice.

use std::rc::Rc;

use bistro_core::{
    CoreError, Menu, MenuBundle, MenuComponent, MenuLeaf, Money, Order, PricingConfig,
    QuantityPolicy, Reservation, Staff,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn catalog() -> Menu {
    let mut menu = Menu::new("Hawker Classics", "All day");
    menu.add_child(
        MenuLeaf::new(101, "Char Kway Teow", "Fried flat noodles", Money::from_cents(1000))
            .unwrap(),
    );
    menu.add_child(
        MenuLeaf::new(201, "Sugarcane", "Fresh pressed", Money::from_cents(300)).unwrap(),
    );

    let mut family =
        MenuBundle::new(900, "Family Feast", "Feeds four", Money::from_cents(1500)).unwrap();
    family.add_child(MenuLeaf::new(101, "Char Kway Teow", "", Money::from_cents(1000)).unwrap());
    family.add_child(MenuLeaf::new(201, "Sugarcane", "", Money::from_cents(300)).unwrap());
    menu.add_child(family);
    menu
}

fn open(pricing: PricingConfig) -> Order {
    let at = NaiveDate::from_ymd_opt(2024, 8, 9)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap();
    Order::builder()
        .reservation(Reservation::new(3).shared())
        .staff(Rc::new(Staff::new(11, "Siti")))
        .pricing(pricing)
        .opened_at(at)
        .build()
        .unwrap()
}

#[test]
fn member_pays_discounted_total() {
    let mut menu = catalog();
    let mut order = open(PricingConfig::default());
    order.add_item(menu.get_child_mut(0).unwrap(), 2).unwrap();

    let invoice = order.print_invoice(true).unwrap();
    assert_eq!(invoice.discount, Some(Money::from_cents(200)));
    assert_eq!(invoice.service_charge, Money::from_cents(180));
    assert_eq!(invoice.tax.amount(), Decimal::new(1386, 3));
    assert_eq!(invoice.grand_total.amount(), Decimal::new(21186, 3));
}

#[test]
fn non_member_pays_full_total() {
    let mut menu = catalog();
    let mut order = open(PricingConfig::default());
    order.add_item(menu.get_child_mut(0).unwrap(), 2).unwrap();

    let invoice = order.print_invoice(false).unwrap();
    assert_eq!(invoice.discount, None);
    assert_eq!(invoice.service_charge, Money::from_cents(200));
    assert_eq!(invoice.tax, Money::from_cents(154));
    assert_eq!(invoice.grand_total, Money::from_cents(2354));
}

#[test]
fn bundle_lines_are_flat_priced() {
    let mut menu = catalog();
    let mut order = open(PricingConfig::default());
    order.add_item(menu.get_child_mut(2).unwrap(), 3).unwrap();

    let line = order.menu().get_child(0).unwrap();
    assert_eq!(line.as_bundle().unwrap().children_count(), 2);
    assert_eq!(line.total_price(), Money::from_cents(4500));

    assert!(order.print().contains("3\tFamily Feast\t45.00\n\tChar Kway Teow\n\tSugarcane\n"));
}

#[test]
fn order_bundle_shares_children_with_catalog_bundle() {
    let mut menu = catalog();
    let mut order = open(PricingConfig::default());
    order.add_item(menu.get_child_mut(2).unwrap(), 1).unwrap();

    let catalog_child = menu
        .get_child(2)
        .unwrap()
        .as_bundle()
        .unwrap()
        .get_child(0)
        .unwrap();
    let order_child = order
        .menu()
        .get_child(0)
        .unwrap()
        .as_bundle()
        .unwrap()
        .get_child(0)
        .unwrap();
    assert!(Rc::ptr_eq(&catalog_child, &order_child));

    // Structural edits to the catalog bundle do not reach the order
    menu.get_child_mut(2)
        .unwrap()
        .as_bundle_mut()
        .unwrap()
        .remove_child(0)
        .unwrap();
    assert_eq!(
        order.menu().get_child(0).unwrap().as_bundle().unwrap().children_count(),
        2
    );
}

#[test]
fn default_policy_leaves_catalog_quantities_alone() {
    let mut menu = catalog();
    let mut order = open(PricingConfig::default());
    order.add_item(menu.get_child_mut(1).unwrap(), 4).unwrap();

    assert_eq!(PricingConfig::default().quantity_policy, QuantityPolicy::StampCopy);
    assert_eq!(menu.get_child(1).unwrap().quantity(), 0);
    assert_eq!(order.menu().get_child(0).unwrap().quantity(), 4);
}

#[test]
fn second_invoice_is_silent() {
    let mut menu = catalog();
    let mut order = open(PricingConfig::default());
    order.add_item(menu.get_child_mut(0).unwrap(), 1).unwrap();

    let first = order.print_invoice(false);
    assert!(first.is_some());
    let total = order.total_price();

    assert!(order.print_invoice(true).is_none());
    assert_eq!(order.total_price(), total);
}

#[test]
fn treating_an_item_as_a_bundle_is_rejected() {
    let mut menu = catalog();
    let err = menu
        .get_child_mut(0)
        .unwrap()
        .as_bundle_mut()
        .map(|b| b.children_count())
        .unwrap_err();
    assert!(matches!(err, CoreError::TypeMismatch { .. }));

    let item: MenuComponent = MenuLeaf::new(1, "Tea", "", Money::from_cents(100)).unwrap().into();
    assert!(item.as_bundle().is_err());
}
