//! Plain-text order summary and the messaging deep link that carries it.
use crate::cart::Cart;
use crate::config::ShopfrontConfig;
use crate::money::format_amount;

/// Build the order message, or `None` for an empty cart.
///
/// Lines follow the stored order of the cart.
#[must_use]
pub fn order_summary(cart: &Cart, config: &ShopfrontConfig) -> Option<String> {
    if cart.is_empty() {
        return None;
    }
    let label = &config.currency.label;
    let mut lines: Vec<String> = cart
        .items
        .iter()
        .map(|item| {
            format!(
                "• {} x{} — {}",
                item.title,
                item.qty,
                format_amount(label, item.line_total())
            )
        })
        .collect();
    lines.push(format!("\nSubtotal: {}", format_amount(label, cart.total())));
    Some(format!("{}\n{}", config.checkout.greeting, lines.join("\n")))
}

/// Deep link with the percent-encoded order message, or `None` for an empty cart.
#[must_use]
pub fn checkout_url(cart: &Cart, config: &ShopfrontConfig) -> Option<String> {
    let message = order_summary(cart, config)?;
    Some(format!(
        "{}?text={}",
        config.checkout.endpoint,
        urlencoding::encode(&message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;

    fn cart() -> Cart {
        Cart {
            items: vec![
                CartItem {
                    id: "a".into(),
                    title: "Keyboard".into(),
                    price: 500,
                    qty: 2,
                    ..CartItem::default()
                },
                CartItem {
                    id: "b".into(),
                    title: "Mouse".into(),
                    price: 1_200,
                    qty: 1,
                    ..CartItem::default()
                },
            ],
        }
    }

    #[test]
    fn empty_cart_has_no_summary() {
        let config = ShopfrontConfig::default();
        assert_eq!(order_summary(&Cart::new(), &config), None);
        assert_eq!(checkout_url(&Cart::new(), &config), None);
    }

    #[test]
    fn summary_lists_lines_and_subtotal() {
        let summary = order_summary(&cart(), &ShopfrontConfig::default()).unwrap();
        assert_eq!(
            summary,
            "Hello DigitalCode,\nI'd like to buy:\n\
             • Keyboard x2 — NPR 1,000\n\
             • Mouse x1 — NPR 1,200\n\
             \nSubtotal: NPR 2,200"
        );
    }

    #[test]
    fn url_encodes_message_after_endpoint() {
        let url = checkout_url(&cart(), &ShopfrontConfig::default()).unwrap();
        assert!(url.starts_with("https://wa.me/9779818713854?text=Hello%20DigitalCode%2C%0A"));
        assert!(!url.contains(' '));
        assert!(url.contains("Subtotal%3A%20NPR%202%2C200"));
    }
}
