//! Storefront defaults shared by the core and the web bindings.

// Persistence
pub(crate) const DEFAULT_STORAGE_KEY: &str = "dc_cart_v1";

// Money
pub(crate) const DEFAULT_CURRENCY_LABEL: &str = "NPR";
pub(crate) const DEFAULT_CURRENCY_LOCALE: &str = "en-NP";

// Checkout hand-off
pub(crate) const DEFAULT_CHECKOUT_ENDPOINT: &str = "https://wa.me/9779818713854";
pub(crate) const DEFAULT_CHECKOUT_GREETING: &str = "Hello DigitalCode,\nI'd like to buy:";

// Product cards
pub const DEFAULT_PRODUCT_TITLE: &str = "Product";
pub const PRODUCT_ID_PREFIX: &str = "prod-";

// Toasts
pub(crate) const TOAST_DISMISS_MS: u32 = 2_600;
pub(crate) const TOAST_RESUME_MS: u32 = 1_200;
pub(crate) const TOAST_FADE_MS: u32 = 200;

// Slider
pub(crate) const SLIDER_DELAY_MS: u32 = 2_500;

// Search
pub(crate) const SEARCH_DEBOUNCE_MS: u32 = 150;
pub(crate) const FOUND_HIGHLIGHT_MS: u32 = 2_200;
pub(crate) const SCROLL_SETTLE_MS: u32 = 350;
pub(crate) const MAX_SEARCH_RESULTS: usize = 6;

// Search scoring weights
pub(crate) const SCORE_TITLE: u32 = 3;
pub(crate) const SCORE_TAGS: u32 = 2;
pub(crate) const SCORE_DETAIL: u32 = 1;

pub(crate) const DEFAULT_LANGUAGE: &str = "en";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";
