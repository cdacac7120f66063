//! Page-provided configuration.
//!
//! A page may define `window.shopfrontConfig = { ... }` before the module
//! loads; any field it omits keeps its default.
use shopfront_core::{ConfigError, ShopfrontConfig};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "shopfrontConfig";

fn from_js(value: JsValue) -> Result<ShopfrontConfig, String> {
    let config: ShopfrontConfig =
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())?;
    config.validate().map_err(|e: ConfigError| e.to_string())?;
    Ok(config)
}

/// Read `window.shopfrontConfig`, falling back to defaults when it is
/// absent or invalid.
#[must_use]
pub fn load() -> ShopfrontConfig {
    let Some(win) = crate::dom::window() else {
        return ShopfrontConfig::default();
    };
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return ShopfrontConfig::default();
    }
    from_js(value).unwrap_or_else(|err| {
        log::warn!("ignoring window.{CONFIG_GLOBAL}: {err}");
        ShopfrontConfig::default()
    })
}
