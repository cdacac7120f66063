//! Storefront configuration.
//!
//! Every field has a default so a page only needs to provide the values it
//! wants to change. Validation rejects values that would stall a widget.
use crate::constants::{
    DEFAULT_CHECKOUT_ENDPOINT, DEFAULT_CHECKOUT_GREETING, DEFAULT_CURRENCY_LABEL,
    DEFAULT_CURRENCY_LOCALE, DEFAULT_LANGUAGE, DEFAULT_LOG_LEVEL, DEFAULT_STORAGE_KEY,
    FOUND_HIGHLIGHT_MS, MAX_SEARCH_RESULTS, SCROLL_SETTLE_MS, SEARCH_DEBOUNCE_MS,
    SLIDER_DELAY_MS, TOAST_DISMISS_MS, TOAST_FADE_MS, TOAST_RESUME_MS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Currency label and the locale used to group digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub label: String,
    pub locale: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_CURRENCY_LABEL.to_string(),
            locale: DEFAULT_CURRENCY_LOCALE.to_string(),
        }
    }
}

/// Outbound order hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Messaging deep link; the order text is appended as `?text=`.
    pub endpoint: String,
    pub greeting: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHECKOUT_ENDPOINT.to_string(),
            greeting: DEFAULT_CHECKOUT_GREETING.to_string(),
        }
    }
}

/// Delays for every timer-driven widget, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub toast_dismiss_ms: u32,
    pub toast_resume_ms: u32,
    pub toast_fade_ms: u32,
    pub slider_delay_ms: u32,
    pub search_debounce_ms: u32,
    pub found_highlight_ms: u32,
    pub scroll_settle_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            toast_dismiss_ms: TOAST_DISMISS_MS,
            toast_resume_ms: TOAST_RESUME_MS,
            toast_fade_ms: TOAST_FADE_MS,
            slider_delay_ms: SLIDER_DELAY_MS,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            found_highlight_ms: FOUND_HIGHLIGHT_MS,
            scroll_settle_ms: SCROLL_SETTLE_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_SEARCH_RESULTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopfrontConfig {
    pub storage_key: String,
    pub currency: CurrencyConfig,
    pub checkout: CheckoutConfig,
    pub timing: TimingConfig,
    pub search: SearchConfig,
    pub language: String,
    pub log_level: String,
}

impl Default for ShopfrontConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency: CurrencyConfig::default(),
            checkout: CheckoutConfig::default(),
            timing: TimingConfig::default(),
            search: SearchConfig::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ShopfrontConfig {
    /// Parse a JSON configuration, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values a widget cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage_key",
                reason: "must not be blank",
            });
        }
        if self.checkout.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "checkout.endpoint",
                reason: "must not be blank",
            });
        }
        if self.search.max_results == 0 {
            return Err(ConfigError::Invalid {
                field: "search.max_results",
                reason: "must be at least 1",
            });
        }
        let t = &self.timing;
        let delays = [
            ("timing.toast_dismiss_ms", t.toast_dismiss_ms),
            ("timing.toast_resume_ms", t.toast_resume_ms),
            ("timing.slider_delay_ms", t.slider_delay_ms),
        ];
        if let Some(&(field, _)) = delays.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::Invalid {
                field,
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// Parsed log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ShopfrontConfig::from_json("{}").unwrap();
        assert_eq!(config, ShopfrontConfig::default());
        assert_eq!(config.storage_key, "dc_cart_v1");
        assert_eq!(config.timing.toast_dismiss_ms, 2_600);
        assert_eq!(config.search.max_results, 6);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config =
            ShopfrontConfig::from_json(r#"{"timing":{"slider_delay_ms":4000},"language":"ne"}"#)
                .unwrap();
        assert_eq!(config.timing.slider_delay_ms, 4_000);
        assert_eq!(config.timing.toast_resume_ms, 1_200);
        assert_eq!(config.language, "ne");
        assert_eq!(config.currency.label, "NPR");
    }

    #[test]
    fn rejects_values_that_stall_widgets() {
        let err = ShopfrontConfig::from_json(r#"{"search":{"max_results":0}}"#).unwrap_err();
        assert!(err.to_string().contains("search.max_results"));

        let err = ShopfrontConfig::from_json(r#"{"timing":{"slider_delay_ms":0}}"#).unwrap_err();
        assert!(err.to_string().contains("timing.slider_delay_ms"));

        let err = ShopfrontConfig::from_json(r#"{"storage_key":"  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "storage_key", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ShopfrontConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn log_level_parses_with_fallback() {
        let mut config = ShopfrontConfig::default();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".into();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        config.log_level = "chatty".into();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
