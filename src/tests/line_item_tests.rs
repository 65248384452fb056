// src/tests/line_item_tests.rs

use serde_json::from_value;

use crate::domain::line_item::LineItemRef;
use crate::domain::logic::{display_unit_price, format_money};
use crate::templates::components::line_item::line_item_summary;
use crate::tests::utils::{shirt_item, test_order};

fn shirt() -> LineItemRef {
    from_value(shirt_item()).expect("valid line item")
}

#[test]
fn displayed_price_is_tax_inclusive() {
    // 2000 cents at 10% tax -> 22.00
    assert!((display_unit_price(2000, 10.0) - 22.0).abs() < 1e-9);
    // 0% tax leaves the base price alone.
    assert!((display_unit_price(2000, 0.0) - 20.0).abs() < 1e-9);
}

#[test]
fn money_formats_with_two_decimals_and_uppercased_currency() {
    assert_eq!(format_money(2000, 10.0, "usd"), "22.00 USD");
    assert_eq!(format_money(999, 25.0, "eur"), "12.49 EUR");
}

#[test]
fn stored_unit_price_is_never_mutated() {
    let item = shirt();
    let _ = format_money(item.unit_price, 10.0, "usd");
    assert_eq!(item.unit_price, 2000);
}

#[test]
fn summary_shows_quantity_title_sku_and_price() {
    let body = line_item_summary(&shirt(), &test_order()).into_string();

    assert!(body.contains("1 x"));
    assert!(body.contains("Shirt"));
    assert!(body.contains("SH-1"));
    assert!(body.contains("22.00 USD"));
}

#[test]
fn missing_sku_falls_back_to_a_dash() {
    let mut item = shirt();
    item.variant.as_mut().unwrap().sku = None;

    assert_eq!(item.sku_label(), "-");
    // An item with no variant at all degrades the same way.
    item.variant = None;
    assert_eq!(item.sku_label(), "-");
}

#[test]
fn missing_thumbnail_gets_the_placeholder_graphic() {
    let body = line_item_summary(&shirt(), &test_order()).into_string();
    assert!(body.contains("image-placeholder"));
    assert!(!body.contains("<img"));

    let mut item = shirt();
    item.thumbnail = Some("https://cdn.example.com/shirt.png".to_string());
    let body = line_item_summary(&item, &test_order()).into_string();
    assert!(body.contains("<img"));
    assert!(body.contains("https://cdn.example.com/shirt.png"));
    assert!(!body.contains("image-placeholder"));
}

#[test]
fn label_links_to_the_product_only_when_one_resolves() {
    let body = line_item_summary(&shirt(), &test_order()).into_string();
    assert!(body.contains(r#"href="/a/products/prod_1""#));

    let mut item = shirt();
    item.variant.as_mut().unwrap().product_id = None;
    let body = line_item_summary(&item, &test_order()).into_string();
    assert!(!body.contains("href="));
}
