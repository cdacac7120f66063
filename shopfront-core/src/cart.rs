//! Shopping cart model.
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Largest price an `f64` carries exactly.
const MAX_EXACT_PRICE: f64 = 9_007_199_254_740_991.0;

/// A product line in the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub img: String,
    /// Unit price in whole currency units. Stored decimals are rounded.
    #[serde(deserialize_with = "whole_units")]
    pub price: u64,
    pub qty: u32,
    /// Milliseconds since the epoch when the line was first added.
    #[serde(default)]
    pub ts: u64,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.qty))
    }
}

/// Accept any non-negative JSON number as a price, rounding fractions to
/// the nearest whole unit.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_units<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(units) = number.as_u64() {
        return Ok(units);
    }
    match number.as_f64().map(f64::round) {
        Some(units) if (0.0..=MAX_EXACT_PRICE).contains(&units) => Ok(units as u64),
        _ => Err(serde::de::Error::custom(format!(
            "price {number} is not a non-negative amount"
        ))),
    }
}

/// Whether adding a product created a line or bumped an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    QuantityUpdated,
}

/// The persisted cart: `{ "items": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_item_mut(&mut self, id: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Merge a product into the cart.
    ///
    /// An existing line gains one unit and keeps its timestamp; otherwise the
    /// product is inserted at the front with quantity 1 stamped `now_ms`.
    pub fn add_product(&mut self, mut product: CartItem, now_ms: u64) -> AddOutcome {
        if let Some(line) = self.find_item_mut(&product.id) {
            line.qty = line.qty.saturating_add(1);
            return AddOutcome::QuantityUpdated;
        }
        product.qty = 1;
        product.ts = now_ms;
        self.items.insert(0, product);
        AddOutcome::Added
    }

    /// Add one unit to a line. Returns `false` when the id is unknown.
    pub fn increment(&mut self, id: &str) -> bool {
        self.find_item_mut(id).is_some_and(|line| {
            line.qty = line.qty.saturating_add(1);
            true
        })
    }

    /// Take one unit from a line, removing it once nothing is left.
    /// Returns the remaining quantity (0 when the line is gone or unknown).
    pub fn decrement(&mut self, id: &str) -> u32 {
        let Some(line) = self.find_item_mut(id) else {
            return 0;
        };
        line.qty = line.qty.saturating_sub(1);
        let remaining = line.qty;
        if remaining == 0 {
            self.remove(id);
        }
        remaining
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price * qty` over every line.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0_u64, |sum, item| sum.saturating_add(item.line_total()))
    }

    /// Sum of quantities, shown on the cart badge.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Lines ordered newest first; equal timestamps keep their stored order.
    #[must_use]
    pub fn newest_first(&self) -> Vec<&CartItem> {
        let mut lines: Vec<&CartItem> = self.items.iter().collect();
        lines.sort_by(|a, b| b.ts.cmp(&a.ts));
        lines
    }

    /// Drop zero-quantity lines and repeated ids (first occurrence wins).
    pub fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.items
            .retain(|item| item.qty > 0 && seen.insert(item.id.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: u64) -> CartItem {
        CartItem {
            id: id.to_string(),
            title: id.to_uppercase(),
            img: String::new(),
            price,
            qty: 1,
            ts: 0,
        }
    }

    #[test]
    fn add_inserts_new_lines_at_front() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_product(product("a", 100), 10), AddOutcome::Added);
        assert_eq!(cart.add_product(product("b", 200), 20), AddOutcome::Added);
        assert_eq!(cart.items[0].id, "b");
        assert_eq!(cart.items[0].ts, 20);
        assert_eq!(cart.items[1].id, "a");
    }

    #[test]
    fn repeated_add_bumps_quantity_and_keeps_timestamp() {
        let mut cart = Cart::new();
        cart.add_product(product("a", 100), 10);
        cart.add_product(product("b", 200), 20);
        let outcome = cart.add_product(product("a", 100), 30);
        assert_eq!(outcome, AddOutcome::QuantityUpdated);
        assert_eq!(cart.items.len(), 2);
        let line = cart.find_item("a").unwrap();
        assert_eq!(line.qty, 2);
        assert_eq!(line.ts, 10);
        assert_eq!(cart.items[0].id, "b");
    }

    #[test]
    fn add_resets_incoming_quantity() {
        let mut cart = Cart::new();
        let mut incoming = product("a", 100);
        incoming.qty = 7;
        cart.add_product(incoming, 1);
        assert_eq!(cart.quantity(), 1);
    }

    #[test]
    fn decrement_removes_line_at_zero() {
        let mut cart = Cart::new();
        cart.add_product(product("a", 100), 1);
        cart.increment("a");
        assert_eq!(cart.decrement("a"), 1);
        assert_eq!(cart.decrement("a"), 0);
        assert!(cart.find_item("a").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut cart = Cart::new();
        cart.add_product(product("a", 100), 1);
        assert!(!cart.increment("zzz"));
        assert_eq!(cart.decrement("zzz"), 0);
        cart.remove("zzz");
        assert_eq!(cart.quantity(), 1);
    }

    #[test]
    fn totals_multiply_price_by_quantity() {
        let mut cart = Cart::new();
        cart.add_product(product("a", 500), 1);
        cart.increment("a");
        cart.add_product(product("b", 1_200), 2);
        assert_eq!(cart.total(), 2_200);
        assert_eq!(cart.quantity(), 3);
    }

    #[test]
    fn newest_first_sorts_by_timestamp_descending() {
        let mut cart = Cart::new();
        cart.items = vec![
            CartItem { ts: 5, ..product("old", 1) },
            CartItem { ts: 50, ..product("new", 1) },
            CartItem { ts: 0, ..product("legacy", 1) },
        ];
        let ids: Vec<&str> = cart.newest_first().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["new", "old", "legacy"]);
    }

    #[test]
    fn normalize_enforces_unique_positive_lines() {
        let mut cart = Cart::new();
        cart.items = vec![
            CartItem { qty: 2, ..product("a", 1) },
            CartItem { qty: 0, ..product("b", 1) },
            CartItem { qty: 9, ..product("a", 1) },
        ];
        cart.normalize();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].qty, 2);
    }

    #[test]
    fn serializes_to_stored_shape() {
        let mut cart = Cart::new();
        cart.add_product(product("a", 500), 42);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{"id": "a", "title": "A", "img": "", "price": 500, "qty": 1, "ts": 42}]
            })
        );
    }
}
