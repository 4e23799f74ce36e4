use serde_json::json;

use crate::{Item, Store};

#[test]
fn store_serializes_with_nested_items() {
    let v = serde_json::to_value(Store::example()).unwrap();
    assert_eq!(
        v,
        json!({
            "name": "My Store",
            "items": [
                {"name": "Chair", "price": 15.99},
                {"name": "Bed", "price": 120.23}
            ]
        })
    );
}

#[test]
fn new_store_has_no_items() {
    let s = Store::new("New Store");
    assert!(s.items.is_empty());
    assert_eq!(serde_json::to_value(&s).unwrap(), json!({"name": "New Store", "items": []}));
}

#[test]
fn name_match_is_exact() {
    let s = Store::new("My Store");
    assert!(s.is_named("My Store"));
    assert!(!s.is_named("my store"));
    assert!(!s.is_named(" My Store"));
    assert!(!s.is_named("My Store "));
}

#[test]
fn store_missing_items_deserializes_empty() {
    let s: Store = serde_json::from_value(json!({"name": "Bare"})).unwrap();
    assert_eq!(s, Store::new("Bare"));
}

#[test]
fn blank_names_and_negative_prices_round_trip() {
    let s: Store = serde_json::from_value(json!({"name": "", "items": [{"name": " ", "price": -5.0}]})).unwrap();
    assert_eq!(s, Store::with_items("", vec![Item::new(" ", -5.0)]));
}

#[test]
fn item_price_accepts_integer_json() {
    let i: Item = serde_json::from_value(json!({"name": "Rug", "price": 10})).unwrap();
    assert_eq!(i, Item::new("Rug", 10.0));
}
