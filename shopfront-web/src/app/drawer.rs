//! The `#cartDrawer` panel and its item list.
use crate::a11y;
use crate::components::{CartItemList, cart_items};
use crate::dom;
use shopfront_core::{Cart, CartAction, CartSummary, CurrencyConfig, DrawerEffects, DrawerState};
use std::cell::{Cell, RefCell};
use web_sys::Element;
use yew::{AppHandle, AttrValue, Callback};

pub struct CartDrawer {
    host: Element,
    state: Cell<DrawerState>,
    items: RefCell<Option<AppHandle<CartItemList>>>,
    currency: AttrValue,
    locale: AttrValue,
    on_action: Callback<CartAction>,
}

impl CartDrawer {
    /// Bind to `#cartDrawer`. Pages without a drawer get `None` and keep
    /// the rest of the widget.
    #[must_use]
    pub fn mount(currency: &CurrencyConfig, on_action: Callback<CartAction>) -> Option<Self> {
        let Some(host) = dom::by_id("cartDrawer") else {
            log::debug!("no #cartDrawer on this page");
            return None;
        };
        Some(Self {
            host,
            state: Cell::new(DrawerState::default()),
            items: RefCell::new(None),
            currency: currency.label.clone().into(),
            locale: currency.locale.clone().into(),
            on_action,
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    /// Open (or re-render an already open) drawer.
    pub fn open(&self, cart: &Cart) {
        let mut state = self.state.get();
        let effects = state.open();
        self.state.set(state);
        self.apply(effects, cart);
    }

    pub fn close(&self) {
        let mut state = self.state.get();
        let effects = state.close();
        self.state.set(state);
        self.apply(effects, &Cart::new());
    }

    /// Escape handling. Returns `true` if the key closed the drawer.
    pub fn handle_key(&self, key: &str) -> bool {
        let mut state = self.state.get();
        let effects = state.handle_key(key);
        self.state.set(state);
        effects.is_some_and(|effects| {
            self.apply(effects, &Cart::new());
            true
        })
    }

    fn apply(&self, effects: DrawerEffects, cart: &Cart) {
        if effects.toggle_visibility {
            let open = self.is_open();
            let classes = self.host.class_list();
            let _ = if open {
                classes.add_1("is-open")
            } else {
                classes.remove_1("is-open")
            };
            let _ = self
                .host
                .set_attribute("aria-hidden", if open { "false" } else { "true" });
            a11y::lock_scroll(open);
        }
        if effects.render {
            self.render(cart);
        }
    }

    /// Rebuild `#cartItems` from `cart`, newest first.
    pub fn render(&self, cart: &Cart) {
        let props = cart_items::Props {
            rows: CartSummary::from_cart(cart).rows,
            currency: self.currency.clone(),
            locale: self.locale.clone(),
            on_action: self.on_action.clone(),
        };
        let mut items = self.items.borrow_mut();
        if let Some(view) = items.as_mut() {
            view.update(props);
            return;
        }
        let Some(host) = dom::by_id("cartItems") else {
            log::debug!("no #cartItems on this page");
            return;
        };
        host.set_inner_html("");
        *items = Some(yew::Renderer::<CartItemList>::with_root_and_props(host, props).render());
    }
}
