#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Group a whole amount for display using `locale` via Intl.
///
/// Host builds (and browsers where Intl refuses the locale) use plain
/// comma-separated thousands.
#[must_use]
pub fn fmt_number(amount: u64, locale: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::of1(&JsValue::from_str(locale));
        let nf = Intl::NumberFormat::new(&locales, &Object::new());
        let format_fn: Function = nf.format();
        #[allow(clippy::cast_precision_loss)]
        let value = JsValue::from_f64(amount as f64);
        if let Some(text) = format_fn.call1(&nf, &value).ok().and_then(|v| v.as_string()) {
            return text;
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = locale;

    shopfront_core::group_thousands(amount)
}

/// Format an amount with its currency label, e.g. `NPR 2,200`.
#[must_use]
pub fn fmt_money(label: &str, amount: u64, locale: &str) -> String {
    format!("{label} {}", fmt_number(amount, locale))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_formatting_groups_thousands() {
        assert_eq!(fmt_number(2_200, "en-NP"), "2,200");
        assert_eq!(fmt_money("NPR", 0, "en-NP"), "NPR 0");
        assert_eq!(fmt_money("NPR", 1_250_000, "en-NP"), "NPR 1,250,000");
    }
}
