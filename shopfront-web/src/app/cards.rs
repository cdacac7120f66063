//! Product data read straight from catalog markup.
use crate::dom;
use shopfront_core::ProductCard;
use web_sys::Element;

/// Cards the search index covers.
pub const SEARCHABLE_CARDS: &str = "#catalog .card, #home-catalog .card";

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Extract everything the cart and search need from one `.card`.
#[must_use]
pub fn read_card(card: &Element) -> ProductCard {
    ProductCard {
        element_id: non_empty(card.id()),
        title: dom::child_text(card, "h3"),
        img: dom::child_attr(card, "img", "src").and_then(non_empty),
        alt: dom::child_attr(card, "img", "alt"),
        price_label: dom::child_text(card, ".price .new"),
        description: dom::child_text(card, ".desc"),
        tags: card.get_attribute("data-tags"),
    }
}

/// Read every searchable card, giving id-less cards their slug id so that
/// search results can be navigated to.
#[must_use]
pub fn index_cards() -> Vec<ProductCard> {
    dom::query_document(SEARCHABLE_CARDS)
        .iter()
        .map(|el| {
            let card = read_card(el);
            if card.needs_generated_id() {
                el.set_id(&card.id());
            }
            card
        })
        .collect()
}
