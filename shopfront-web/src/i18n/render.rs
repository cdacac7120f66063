use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::of1(&wasm_bindgen::JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        if let Some(selected) = rules.select(count).as_string() {
            return selected;
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = lang;

    if (count - 1.0).abs() < f64::EPSILON {
        "one".to_string()
    } else {
        "other".to_string()
    }
}

fn pick_variant(
    map: &serde_json::Map<String, Value>,
    lang: &str,
    args: Option<&BTreeMap<&str, &str>>,
) -> Option<String> {
    let count = args
        .and_then(|m| m.get("count"))
        .and_then(|c| c.parse::<f64>().ok());
    count
        .and_then(|n| map.get(&plural_category(lang, n)))
        .or_else(|| map.get("_"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => pick_variant(map, lang, args)?,
        _ => return None,
    };
    for (name, replacement) in args.into_iter().flatten() {
        text = text.replace(&format!("{{{name}}}"), replacement);
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        lookup(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| lookup(&bundle.fallback, key).and_then(|v| render_value(v, "en", args)))
    })
}

/// Translate a key to the current language, falling back to English and
/// then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, substituting `{name}` placeholders from `args`.
/// A `count` argument selects a plural variant when the entry has them.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_resolve() {
        crate::i18n::set_lang("en");
        assert_eq!(t("toast.added"), "Added to cart");
        assert_eq!(t("toast.missing"), "toast.missing");
    }

    #[test]
    fn interpolation_and_plurals() {
        crate::i18n::set_lang("en");
        let mut args = BTreeMap::new();
        args.insert("item", "Blue Shirt");
        assert_eq!(tr("status.added", Some(&args)), "Added to cart: Blue Shirt");

        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(tr("cart.count", Some(&args)), "1 item in cart");
        args.insert("count", "4");
        assert_eq!(tr("cart.count", Some(&args)), "4 items in cart");
    }

    #[test]
    fn default_variant_covers_missing_plural() {
        let mut map = serde_json::Map::new();
        map.insert("_".into(), Value::String("{count} things".into()));
        let mut args = BTreeMap::new();
        args.insert("count", "2");
        assert_eq!(
            render_value(&Value::Object(map), "ne", Some(&args)).as_deref(),
            Some("2 things")
        );
    }
}
