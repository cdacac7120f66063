//! Shopfront core
//!
//! Platform-agnostic logic for the storefront widget: the persisted cart,
//! product extraction rules, search scoring, and the timing state machines
//! behind toasts, the slider and search debounce. Nothing here touches the
//! browser; the web crate supplies storage and a clock.

pub mod cart;
pub mod checkout;
pub mod command;
pub mod config;
pub mod constants;
pub mod drawer;
pub mod money;
pub mod product;
pub mod search;
pub mod slider;
pub mod store;
pub mod toast;

// Re-export commonly used types
pub use cart::{AddOutcome, Cart, CartItem};
pub use checkout::{checkout_url, order_summary};
pub use command::{CLICK_ROUTES, CartAction, CommandKind, CommandRoute, route_click};
pub use config::{
    CheckoutConfig, ConfigError, CurrencyConfig, SearchConfig, ShopfrontConfig, TimingConfig,
};
pub use drawer::{CartRow, CartSummary, DrawerEffects, DrawerState};
pub use money::{format_amount, group_thousands, parse_price};
pub use product::{ProductCard, product_slug};
pub use search::{
    Debouncer, PanelState, SearchEntry, SearchHit, SearchHits, SearchIndex, SubmitOutcome,
    Suggestion, score,
};
pub use slider::{SlideChange, SliderState};
pub use store::{
    CartLoad, CartStorage, CartStore, FallbackReason, MemoryStorage, StoreError, parse_cart,
};
pub use toast::{ToastBoard, ToastEntry, ToastId, ToastMessage, ToastPhase, add_outcome_title_key};
