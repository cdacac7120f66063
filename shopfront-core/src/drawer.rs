//! Cart drawer state and the view model it renders.
use crate::cart::Cart;

/// Open/closed flag for the drawer. Opening an open drawer only re-renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

/// Effects the web layer must perform after a drawer transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerEffects {
    /// Toggle `is-open`, `aria-hidden` and the page scroll lock.
    pub toggle_visibility: bool,
    /// Rebuild the item list from storage.
    pub render: bool,
}

impl DrawerState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    pub const fn open(&mut self) -> DrawerEffects {
        let was_open = self.open;
        self.open = true;
        DrawerEffects {
            toggle_visibility: !was_open,
            render: true,
        }
    }

    pub const fn close(&mut self) -> DrawerEffects {
        let was_open = self.open;
        self.open = false;
        DrawerEffects {
            toggle_visibility: was_open,
            render: false,
        }
    }

    /// Key handling: only Escape, and only while open.
    pub fn handle_key(&mut self, key: &str) -> Option<DrawerEffects> {
        (key == "Escape" && self.open).then(|| self.close())
    }
}

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: String,
    pub title: String,
    pub img: String,
    pub qty: u32,
    pub price: u64,
}

/// Everything the drawer, badge and checkout button show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSummary {
    /// Newest first.
    pub rows: Vec<CartRow>,
    pub subtotal: u64,
    pub quantity: u64,
}

impl CartSummary {
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            rows: cart
                .newest_first()
                .into_iter()
                .map(|item| CartRow {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    img: item.img.clone(),
                    qty: item.qty,
                    price: item.price,
                })
                .collect(),
            subtotal: cart.total(),
            quantity: cart.quantity(),
        }
    }

    #[must_use]
    pub fn checkout_enabled(&self) -> bool {
        !self.rows.is_empty()
    }
}
