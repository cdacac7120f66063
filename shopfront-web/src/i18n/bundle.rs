use crate::i18n::locales::load_translations;
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn empty() -> Value {
    Value::Object(serde_json::Map::new())
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let translations = load_translations(lang)?;
    let fallback = load_translations("en").unwrap_or_else(empty);
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn english_bundle() -> I18nBundle {
    build_bundle("en").unwrap_or_else(|| I18nBundle {
        lang: "en".to_string(),
        translations: empty(),
        fallback: empty(),
    })
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(english_bundle());
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language. Unknown codes keep the current bundle and
/// return `false`.
pub fn set_lang(lang: &str) -> bool {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported language `{lang}`, keeping {}", current_lang());
        return false;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    true
}

/// Get the current active language code.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_language_keeps_english_fallback() {
        assert!(set_lang("ne"));
        assert_eq!(current_lang(), "ne");
        with_bundle(|bundle| assert!(bundle.fallback.get("toast").is_some()));
        assert!(!set_lang("xx"));
        assert_eq!(current_lang(), "ne");
        assert!(set_lang("en"));
    }
}
