//! `localStorage` backend for the cart store.
use crate::dom;
use shopfront_core::CartStorage;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("localStorage: {0}")]
pub struct StorageError(pub String);

/// Browser `localStorage`, resolved on every access so a page that blocks
/// storage still gets an empty cart instead of a failed start.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl CartStorage for LocalStorage {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage().map_err(|e| StorageError(dom::js_error_message(&e)))?;
        storage
            .get_item(key)
            .map_err(|e| StorageError(dom::js_error_message(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(|e| StorageError(dom::js_error_message(&e)))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError(dom::js_error_message(&e)))
    }
}
