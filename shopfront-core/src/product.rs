//! Product data as read from a catalog card.
use crate::cart::CartItem;
use crate::constants::{DEFAULT_PRODUCT_TITLE, PRODUCT_ID_PREFIX};
use crate::money::parse_price;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Derive a stable product id from a title: `"Blue Shirt!"` -> `"prod-blue-shirt"`.
#[must_use]
pub fn product_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let dashed = NON_SLUG.replace_all(&lowered, "-");
    format!("{PRODUCT_ID_PREFIX}{}", dashed.trim_matches('-'))
}

/// Raw fields of a product card. Every field is optional because cards are
/// authored by hand and may omit any element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCard {
    /// The card element's own `id`, if non-empty.
    pub element_id: Option<String>,
    /// Heading text.
    pub title: Option<String>,
    /// Image `src`.
    pub img: Option<String>,
    /// Image `alt`.
    pub alt: Option<String>,
    /// Text of the current ("new") price label.
    pub price_label: Option<String>,
    /// Description text.
    pub description: Option<String>,
    /// The `data-tags` attribute.
    pub tags: Option<String>,
}

impl ProductCard {
    /// Trimmed heading, or the generic product title.
    #[must_use]
    pub fn title(&self) -> String {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PRODUCT_TITLE)
            .to_string()
    }

    /// The element id, or a slug of the title when the card has none.
    #[must_use]
    pub fn id(&self) -> String {
        self.element_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(|| product_slug(&self.title()), str::to_string)
    }

    /// Whether the card needs a generated id written back to its element.
    #[must_use]
    pub fn needs_generated_id(&self) -> bool {
        self.element_id.as_deref().is_none_or(|id| id.trim().is_empty())
    }

    #[must_use]
    pub fn price(&self) -> u64 {
        self.price_label.as_deref().map_or(0, parse_price)
    }

    /// The cart line this card would add, before timestamping.
    #[must_use]
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id(),
            title: self.title(),
            img: self.img.clone().unwrap_or_default(),
            price: self.price(),
            qty: 1,
            ts: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_runs_and_trims_dashes() {
        assert_eq!(product_slug("Blue Shirt"), "prod-blue-shirt");
        assert_eq!(product_slug("  Wi-Fi Router (AC1200)!! "), "prod-wi-fi-router-ac1200");
        assert_eq!(product_slug("???"), "prod-");
    }

    #[test]
    fn card_without_id_uses_title_slug() {
        let card = ProductCard {
            title: Some("  Gaming Mouse ".into()),
            price_label: Some("NPR 2,499".into()),
            ..ProductCard::default()
        };
        assert!(card.needs_generated_id());
        let item = card.to_cart_item();
        assert_eq!(item.id, "prod-gaming-mouse");
        assert_eq!(item.title, "Gaming Mouse");
        assert_eq!(item.price, 2_499);
        assert_eq!(item.qty, 1);
        assert_eq!(item.img, "");
    }

    #[test]
    fn explicit_id_wins() {
        let card = ProductCard {
            element_id: Some("sku-42".into()),
            title: Some("Anything".into()),
            img: Some("/img/42.webp".into()),
            ..ProductCard::default()
        };
        assert!(!card.needs_generated_id());
        assert_eq!(card.id(), "sku-42");
        assert_eq!(card.to_cart_item().img, "/img/42.webp");
    }

    #[test]
    fn missing_heading_falls_back_to_generic_title() {
        let card = ProductCard::default();
        assert_eq!(card.title(), "Product");
        assert_eq!(card.id(), "prod-product");
        assert_eq!(card.price(), 0);
    }
}
