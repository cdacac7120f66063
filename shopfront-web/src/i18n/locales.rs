use serde_json::Value;

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("ne", include_str!("../../i18n/ne.json")),
];

/// Parsed translations for `lang`, or `None` for unknown codes.
pub fn load_translations(lang: &str) -> Option<Value> {
    let (_, data) = LOCALE_TABLE.iter().find(|(code, _)| *code == lang)?;
    serde_json::from_str(data).ok()
}
