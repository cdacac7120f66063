use shopfront_core::{CartLoad, CartStore, FallbackReason, MemoryStorage, parse_cart};

const KEY: &str = "dc_cart_v1";

#[test]
fn malformed_values_fall_back_to_empty_cart() {
    let cases = [
        "",
        "undefined",
        "{\"items\":",
        "42",
        "\"items\"",
        "{\"items\":null}",
        "{\"items\":{}}",
        "{\"products\":[]}",
    ];
    for raw in cases {
        assert!(
            matches!(parse_cart(raw), CartLoad::Fallback(_)),
            "expected fallback for {raw:?}"
        );
        let storage = MemoryStorage::new();
        storage.insert_raw(KEY, raw);
        let store = CartStore::new(storage, KEY);
        let cart = store.get_cart();
        assert!(cart.items.is_empty());
        assert_eq!(cart.quantity(), 0);
    }
}

#[test]
fn fallback_reasons_distinguish_json_from_shape() {
    assert!(matches!(
        parse_cart("{oops"),
        CartLoad::Fallback(FallbackReason::Corrupt(_))
    ));
    assert!(matches!(
        parse_cart("{\"items\":3}"),
        CartLoad::Fallback(FallbackReason::NotCartShaped(_))
    ));
}

#[test]
fn extra_fields_are_tolerated() {
    let raw = r#"{"version":2,"items":[
        {"id":"a","title":"A","img":"a.png","price":100,"qty":3,"ts":9,"note":"gift"}
    ]}"#;
    let CartLoad::Valid(cart) = parse_cart(raw) else {
        panic!("expected valid cart");
    };
    assert_eq!(cart.quantity(), 3);
    assert_eq!(cart.items[0].img, "a.png");
}

#[test]
fn hand_edited_duplicates_and_zero_lines_are_normalised() {
    let raw = r#"{"items":[
        {"id":"a","title":"A","price":100,"qty":0},
        {"id":"b","title":"B","price":100,"qty":2},
        {"id":"b","title":"B again","price":100,"qty":5}
    ]}"#;
    let cart = parse_cart(raw).into_cart();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].title, "B");
    assert_eq!(cart.quantity(), 2);
}

#[test]
fn decimal_prices_are_rounded_and_other_lines_survive() {
    let raw = r#"{"items":[
        {"id":"a","title":"A","img":"","price":499.5,"qty":1,"ts":2},
        {"id":"b","title":"B","img":"","price":100,"qty":2,"ts":1},
        {"id":"c","title":"C","price":-5,"qty":1},
        {"id":"d","title":"D","price":5,"qty":"2"}
    ]}"#;
    let CartLoad::Valid(cart) = parse_cart(raw) else {
        panic!("expected valid cart");
    };
    let ids: Vec<&str> = cart.items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(cart.items[0].price, 500);
    assert_eq!(cart.total(), 700);
    assert_eq!(cart.quantity(), 3);

    let storage = MemoryStorage::new();
    storage.insert_raw(KEY, raw);
    let store = CartStore::new(storage, KEY);
    assert_eq!(store.get_cart(), cart);
}
