#![forbid(unsafe_code)]
//! Browser half of the storefront widget: binds the cart drawer, toasts,
//! deal slider and product search to an existing static page.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod i18n;
pub mod logging;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    let config = config::load();
    log::set_max_level(config.log_level_filter());
    crate::i18n::set_lang(&config.language);
    app::mount_when_ready(config);
}
