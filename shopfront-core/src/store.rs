//! Cart persistence over a key/value storage backend.
//!
//! Reads never fail from the caller's point of view: anything that is not a
//! well-formed cart degrades to an empty one, and the reason is reported as
//! a [`CartLoad::Fallback`] for logging.
use crate::cart::{AddOutcome, Cart, CartItem};
use crate::command::CartAction;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;
use thiserror::Error;

/// Trait for abstracting string key/value persistence.
/// Platform-specific implementations should provide this.
pub trait CartStorage {
    type Error: std::error::Error + 'static;

    /// Read the raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-process storage, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing cart serialization.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl CartStorage for MemoryStorage {
    type Error = Infallible;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.insert_raw(key, value);
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage write failed: {0}")]
    Storage(String),
}

/// Why a stored cart was replaced by an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Nothing stored under the key yet.
    Absent,
    /// The backend could not be read.
    Unavailable(String),
    /// The value is not valid JSON.
    Corrupt(String),
    /// Valid JSON, but not `{ "items": [ ...cart items ] }`.
    NotCartShaped(String),
}

/// Result of validating the stored cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartLoad {
    Valid(Cart),
    Fallback(FallbackReason),
}

impl CartLoad {
    /// Collapse to a cart, empty for every fallback.
    #[must_use]
    pub fn into_cart(self) -> Cart {
        match self {
            Self::Valid(cart) => cart,
            Self::Fallback(_) => Cart::new(),
        }
    }
}

/// Validate raw stored text as a cart.
///
/// Only a missing or non-array `items` rejects the whole value. Lines that do
/// not describe a cart item are dropped one by one and the rest are kept.
#[must_use]
pub fn parse_cart(raw: &str) -> CartLoad {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => return CartLoad::Fallback(FallbackReason::Corrupt(e.to_string())),
    };
    let Value::Object(mut fields) = value else {
        return CartLoad::Fallback(FallbackReason::NotCartShaped(String::from(
            "cart is not an object",
        )));
    };
    let Some(Value::Array(lines)) = fields.remove("items") else {
        return CartLoad::Fallback(FallbackReason::NotCartShaped(String::from(
            "missing `items` array",
        )));
    };
    let mut cart = Cart::new();
    for (idx, line) in lines.into_iter().enumerate() {
        match serde_json::from_value::<CartItem>(line) {
            Ok(item) => cart.items.push(item),
            Err(e) => log::warn!("dropping stored cart line {idx}: {e}"),
        }
    }
    cart.normalize();
    CartLoad::Valid(cart)
}

/// Reads and writes the cart under one storage key.
#[derive(Debug, Clone)]
pub struct CartStore<S: CartStorage> {
    storage: S,
    key: String,
}

impl<S: CartStorage> CartStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read and validate the stored cart.
    #[must_use]
    pub fn load(&self) -> CartLoad {
        match self.storage.read(&self.key) {
            Ok(Some(raw)) => parse_cart(&raw),
            Ok(None) => CartLoad::Fallback(FallbackReason::Absent),
            Err(e) => CartLoad::Fallback(FallbackReason::Unavailable(e.to_string())),
        }
    }

    /// The stored cart, or an empty one when nothing usable is stored.
    #[must_use]
    pub fn get_cart(&self) -> Cart {
        match self.load() {
            CartLoad::Valid(cart) => cart,
            CartLoad::Fallback(FallbackReason::Absent) => Cart::new(),
            CartLoad::Fallback(reason) => {
                log::warn!("stored cart under `{}` ignored: {reason:?}", self.key);
                Cart::new()
            }
        }
    }

    /// Serialize and persist the cart immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the backend rejects the write.
    pub fn save_cart(&self, cart: &Cart) -> Result<(), StoreError> {
        let text = serde_json::to_string(cart)?;
        self.storage
            .write(&self.key, &text)
            .map_err(|e| StoreError::Storage(e.to_string()))
    }

    /// Merge a product into the stored cart and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be saved.
    pub fn add_product(
        &self,
        product: CartItem,
        now_ms: u64,
    ) -> Result<(Cart, AddOutcome), StoreError> {
        let mut cart = self.get_cart();
        let outcome = cart.add_product(product, now_ms);
        self.save_cart(&cart)?;
        Ok((cart, outcome))
    }

    /// Apply a drawer action to the stored cart and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be saved.
    pub fn apply(&self, action: &CartAction) -> Result<Cart, StoreError> {
        let mut cart = self.get_cart();
        action.apply(&mut cart);
        self.save_cart(&cart)?;
        Ok(cart)
    }

    /// Replace the stored cart with an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty cart cannot be saved.
    pub fn clear(&self) -> Result<Cart, StoreError> {
        let cart = Cart::new();
        self.save_cart(&cart)?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "dc_cart_v1";

    fn store() -> CartStore<MemoryStorage> {
        CartStore::new(MemoryStorage::new(), KEY)
    }

    fn product(id: &str, price: u64) -> CartItem {
        CartItem {
            id: id.to_string(),
            title: format!("Item {id}"),
            price,
            qty: 1,
            ..CartItem::default()
        }
    }

    #[test]
    fn absent_value_loads_as_fallback() {
        let store = store();
        assert_eq!(store.load(), CartLoad::Fallback(FallbackReason::Absent));
        assert_eq!(store.get_cart(), Cart::new());
    }

    #[test]
    fn corrupt_and_misshapen_values_degrade_to_empty() {
        let store = store();
        for raw in ["{not json", "null", "[]", r#"{"items":5}"#] {
            store.storage().insert_raw(KEY, raw);
            assert!(
                matches!(store.load(), CartLoad::Fallback(_)),
                "expected fallback for {raw}"
            );
            assert_eq!(store.get_cart().quantity(), 0);
        }
    }

    #[test]
    fn unreadable_lines_are_dropped_individually() {
        let store = store();
        store.storage().insert_raw(
            KEY,
            r#"{"items":[{"id":1},{"id":"a","title":"A","price":10,"qty":1}]}"#,
        );
        let cart = store.get_cart();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].id, "a");
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store();
        let (cart, outcome) = store.add_product(product("a", 500), 7).unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(store.load(), CartLoad::Valid(cart));
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let store = store();
        store
            .storage()
            .insert_raw(KEY, r#"{"items":[{"id":"a","title":"A","price":10,"qty":2}]}"#);
        let cart = store.get_cart();
        assert_eq!(cart.items[0].img, "");
        assert_eq!(cart.items[0].ts, 0);
        assert_eq!(cart.total(), 20);
    }

    #[test]
    fn apply_and_clear_persist_immediately() {
        let store = store();
        store.add_product(product("a", 500), 1).unwrap();
        store.apply(&CartAction::Increment("a".into())).unwrap();
        assert_eq!(store.get_cart().quantity(), 2);
        store.clear().unwrap();
        assert_eq!(store.storage().raw(KEY).as_deref(), Some(r#"{"items":[]}"#));
    }
}
