use futures::executor::block_on;
use shopfront_core::{
    Cart, CartItem, CartSummary, PanelState, SearchIndex, ProductCard, ToastBoard, ToastMessage,
    TimingConfig,
};
use shopfront_web::components::{
    CartItemList, SearchPanel, ToastStack, cart_items, search_panel, toast_stack,
};
use yew::{Callback, LocalServerRenderer};

fn card(title: &str, desc: &str) -> ProductCard {
    ProductCard {
        title: Some(title.to_string()),
        description: Some(desc.to_string()),
        ..ProductCard::default()
    }
}

#[test]
fn drawer_rows_follow_cart_summary_order() {
    shopfront_web::i18n::set_lang("en");
    let mut cart = Cart::new();
    cart.add_product(
        CartItem {
            id: "prod-blue-shirt".into(),
            title: "Blue Shirt".into(),
            price: 500,
            qty: 1,
            ..CartItem::default()
        },
        10,
    );
    cart.add_product(
        CartItem {
            id: "prod-desk-lamp".into(),
            title: "Desk Lamp".into(),
            price: 899,
            qty: 1,
            ..CartItem::default()
        },
        20,
    );
    let props = cart_items::Props {
        rows: CartSummary::from_cart(&cart).rows,
        currency: "NPR".into(),
        locale: "en-NP".into(),
        on_action: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CartItemList>::with_props(props).render());
    let lamp = html.find("Desk Lamp").expect("lamp row");
    let shirt = html.find("Blue Shirt").expect("shirt row");
    assert!(lamp < shirt, "newest line renders first: {html}");
    assert!(html.contains("NPR 899"));
    assert!(html.contains("readonly"));
}

#[test]
fn nepali_labels_render_in_toasts() {
    shopfront_web::i18n::set_lang("ne");
    let mut board = ToastBoard::new(&TimingConfig::default());
    board.push(
        ToastMessage {
            title: "कार्टमा थपियो".into(),
            subtitle: "Blue Shirt".into(),
            img: "/img/shirt.jpg".into(),
        },
        0,
    );
    let props = toast_stack::Props {
        toasts: board.entries().to_vec(),
        fade_ms: 200,
        on_enter: Callback::noop(),
        on_leave: Callback::noop(),
        on_view: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ToastStack>::with_props(props).render());
    shopfront_web::i18n::set_lang("en");
    assert!(html.contains("हेर्नुहोस्"), "view action is translated: {html}");
    assert!(html.contains("toast__img"));
    assert!(!html.contains("is-leaving"));
}

#[test]
fn search_panel_lists_ranked_suggestions() {
    shopfront_web::i18n::set_lang("en");
    let index = SearchIndex::from_cards(
        &[
            card("Cotton Tee", "pairs well with any shirt"),
            card("Blue Shirt", "classic fit"),
        ],
        6,
    );
    let state = index.panel_for_input("shirt");
    let props = search_panel::Props {
        state,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SearchPanel>::with_props(props).render());
    let title_hit = html.find("Blue Shirt").expect("title match listed");
    let desc_hit = html.find("Cotton Tee").expect("description match listed");
    assert!(title_hit < desc_hit);
}

#[test]
fn search_panel_reports_no_matches() {
    shopfront_web::i18n::set_lang("en");
    let index = SearchIndex::from_cards(&[card("Blue Shirt", "")], 6);
    assert_eq!(index.panel_for_input("lamp"), PanelState::NoMatches);
    let props = search_panel::Props {
        state: PanelState::NoMatches,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SearchPanel>::with_props(props).render());
    assert!(html.contains("No matching products"));
}
