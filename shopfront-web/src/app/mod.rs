//! Page wiring: one `Shopfront` context owns the store, the widgets and the
//! document-level listeners.
pub mod cards;
pub mod drawer;
pub mod search;
pub mod slider;
pub mod toasts;

use crate::a11y;
use crate::dom::{self, Listener};
use crate::i18n;
use crate::storage::LocalStorage;
use drawer::CartDrawer;
use search::ProductSearch;
use shopfront_core::{
    AddOutcome, Cart, CartAction, CartStore, CommandKind, ShopfrontConfig, ToastMessage,
    add_outcome_title_key, checkout_url, route_click,
};
use slider::DealSlider;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use toasts::ToastNotifier;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};
use yew::Callback;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<Shopfront>>> = const { RefCell::new(None) };
}

pub struct Shopfront {
    me: Weak<Self>,
    config: ShopfrontConfig,
    store: CartStore<LocalStorage>,
    drawer: Option<CartDrawer>,
    toasts: Rc<ToastNotifier>,
    _slider: Option<Rc<DealSlider>>,
    _search: Option<Rc<ProductSearch>>,
    listeners: RefCell<Vec<Listener>>,
}

/// Mount once the document has parsed, and keep the context alive for the
/// lifetime of the page.
pub fn mount_when_ready(config: ShopfrontConfig) {
    let Some(doc) = dom::document() else {
        log::warn!("no document; shopfront not mounted");
        return;
    };
    if doc.ready_state() != "loading" {
        mount_page(config);
        return;
    }
    let mut config = Some(config);
    match Listener::new(&doc, "DOMContentLoaded", move |_| {
        if let Some(config) = config.take() {
            mount_page(config);
        }
    }) {
        Ok(listener) => listener.forget(),
        Err(e) => log::error!(
            "cannot wait for DOMContentLoaded: {}",
            dom::js_error_message(&e)
        ),
    }
}

fn mount_page(config: ShopfrontConfig) {
    let shop = Shopfront::mount(config);
    MOUNTED.with(|slot| slot.replace(Some(shop)));
}

impl Shopfront {
    /// Bind every widget present on the page and render the initial cart.
    #[must_use]
    pub fn mount(config: ShopfrontConfig) -> Rc<Self> {
        let shop = Rc::new_cyclic(|me: &Weak<Self>| {
            let on_action = {
                let me = me.clone();
                Callback::from(move |action: CartAction| {
                    if let Some(this) = me.upgrade() {
                        this.apply_action(&action);
                    }
                })
            };
            Self {
                me: me.clone(),
                store: CartStore::new(LocalStorage, config.storage_key.clone()),
                drawer: CartDrawer::mount(&config.currency, on_action),
                toasts: ToastNotifier::new(&config.timing),
                _slider: DealSlider::mount(config.timing.slider_delay_ms),
                _search: ProductSearch::mount(config.timing, config.search.max_results),
                listeners: RefCell::new(Vec::new()),
                config,
            }
        });
        shop.bind();
        let cart = shop.store.get_cart();
        shop.refresh_status(&cart);
        if let Some(drawer) = &shop.drawer {
            drawer.render(&cart);
        }
        log::info!(
            "shopfront mounted with {} cart line(s) under `{}`",
            cart.items.len(),
            shop.store.key()
        );
        shop
    }

    fn listen(&self, event: &'static str, f: fn(&Self, &Event)) {
        let Some(doc) = dom::document() else {
            return;
        };
        let me = self.me.clone();
        match Listener::new(&doc, event, move |e| {
            if let Some(this) = me.upgrade() {
                f(&this, &e);
            }
        }) {
            Ok(listener) => self.listeners.borrow_mut().push(listener),
            Err(e) => log::warn!(
                "document {event} not bound: {}",
                dom::js_error_message(&e)
            ),
        }
    }

    fn bind(&self) {
        self.listen("click", Self::on_click);
        self.listen("keydown", Self::on_keydown);
    }

    fn on_click(&self, e: &Event) {
        let Some((kind, target)) = route_click(|selector| dom::closest(e, selector)) else {
            return;
        };
        log::debug!("click routed to {kind:?}");
        match kind {
            CommandKind::CloseCart => self.close_cart(),
            CommandKind::OpenCart => {
                e.prevent_default();
                self.open_cart();
            }
            CommandKind::AddToCart => {
                e.prevent_default();
                self.add_to_cart(&target);
            }
            CommandKind::ClearCart => self.clear_cart(),
            CommandKind::Checkout => self.checkout(),
        }
    }

    fn on_keydown(&self, e: &Event) {
        let Some(key) = e.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if let Some(drawer) = &self.drawer {
            drawer.handle_key(&key);
        }
    }

    pub fn open_cart(&self) {
        if let Some(drawer) = &self.drawer {
            drawer.open(&self.store.get_cart());
        }
    }

    pub fn close_cart(&self) {
        if let Some(drawer) = &self.drawer {
            drawer.close();
        }
    }

    /// Badge counts, subtotal label and checkout availability.
    fn refresh_status(&self, cart: &Cart) {
        let qty = cart.quantity().to_string();
        let mut args = BTreeMap::new();
        args.insert("count", qty.as_str());
        let label = i18n::tr("cart.count", Some(&args));
        for badge in dom::query_document(".open-cart .cart-count") {
            badge.set_text_content(Some(&qty));
            let _ = badge.set_attribute("aria-label", &label);
        }
        if let Some(subtotal) = dom::by_id("cartSubtotal") {
            let currency = &self.config.currency;
            subtotal.set_text_content(Some(&i18n::fmt_money(
                &currency.label,
                cart.total(),
                &currency.locale,
            )));
        }
        if let Some(button) = dom::by_id("checkoutBtn")
            .and_then(|el| el.dyn_into::<web_sys::HtmlButtonElement>().ok())
        {
            button.set_disabled(cart.is_empty());
        }
    }

    fn render_drawer(&self, cart: &Cart) {
        if let Some(drawer) = &self.drawer {
            drawer.render(cart);
        }
    }

    fn apply_action(&self, action: &CartAction) {
        let cart = match self.store.apply(action) {
            Ok(cart) => cart,
            Err(err) => {
                log::warn!("cart change not saved: {err}");
                return;
            }
        };
        self.refresh_status(&cart);
        self.render_drawer(&cart);
    }

    /// Merge the clicked card into the cart and confirm with a toast.
    fn add_to_cart(&self, control: &Element) {
        let Some(card_el) = control.closest(".card").ok().flatten() else {
            log::debug!("add control outside any .card");
            return;
        };
        let product = cards::read_card(&card_el).to_cart_item();
        let (cart, outcome) = match self.store.add_product(product.clone(), dom::now_ms()) {
            Ok(added) => added,
            Err(err) => {
                log::warn!("`{}` not added: {err}", product.id);
                return;
            }
        };
        self.refresh_status(&cart);
        if self.drawer.as_ref().is_some_and(CartDrawer::is_open) {
            self.render_drawer(&cart);
        }
        self.announce(outcome, &product.title);
        let on_view = {
            let me = self.me.clone();
            Callback::from(move |()| {
                if let Some(this) = me.upgrade() {
                    this.open_cart();
                }
            })
        };
        self.toasts.show(
            ToastMessage {
                title: i18n::t(add_outcome_title_key(outcome)),
                subtitle: product.title,
                img: product.img,
            },
            on_view,
        );
    }

    fn announce(&self, outcome: AddOutcome, title: &str) {
        let key = match outcome {
            AddOutcome::Added => "status.added",
            AddOutcome::QuantityUpdated => "status.updated",
        };
        let mut args = BTreeMap::new();
        args.insert("item", title);
        a11y::set_status(&i18n::tr(key, Some(&args)));
    }

    fn clear_cart(&self) {
        let cart = match self.store.clear() {
            Ok(cart) => cart,
            Err(err) => {
                log::warn!("cart not cleared: {err}");
                return;
            }
        };
        self.refresh_status(&cart);
        self.render_drawer(&cart);
        a11y::set_status(&i18n::t("status.cleared"));
    }

    /// Hand the order off to the messaging endpoint in a new tab.
    fn checkout(&self) {
        let cart = self.store.get_cart();
        let Some(url) = checkout_url(&cart, &self.config) else {
            return;
        };
        let opened = dom::window().map(|win| win.open_with_url_and_target(&url, "_blank"));
        if let Some(Err(e)) = opened {
            log::warn!("checkout link not opened: {}", dom::js_error_message(&e));
        }
    }
}
