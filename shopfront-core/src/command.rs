//! Typed commands for everything a shopper can click.
//!
//! The web layer only decides *which* command a click maps to; what each
//! command does to the cart lives here.
use crate::cart::Cart;

/// Quantity controls on a cart row, keyed by item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Increment(String),
    Decrement(String),
    Remove(String),
}

impl CartAction {
    pub fn apply(&self, cart: &mut Cart) {
        match self {
            Self::Increment(id) => {
                cart.increment(id);
            }
            Self::Decrement(id) => {
                cart.decrement(id);
            }
            Self::Remove(id) => cart.remove(id),
        }
    }

    /// Resolve a row control from its `data-inc` / `data-dec` / `data-remove`
    /// attribute values, in that order of precedence.
    #[must_use]
    pub fn from_markers(
        inc: Option<&str>,
        dec: Option<&str>,
        remove: Option<&str>,
    ) -> Option<Self> {
        inc.map(|id| Self::Increment(id.to_string()))
            .or_else(|| dec.map(|id| Self::Decrement(id.to_string())))
            .or_else(|| remove.map(|id| Self::Remove(id.to_string())))
    }
}

/// Page-level click targets, detected by delegated click handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    OpenCart,
    CloseCart,
    AddToCart,
    ClearCart,
    Checkout,
}

/// One row of the click dispatch table: a selector and the command it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRoute {
    pub selector: &'static str,
    pub kind: CommandKind,
}

/// Delegated click routes, checked in order against the click target's
/// ancestors. Close comes first so a close button nested in an open trigger
/// still closes.
pub const CLICK_ROUTES: &[CommandRoute] = &[
    CommandRoute {
        selector: "[data-close-cart]",
        kind: CommandKind::CloseCart,
    },
    CommandRoute {
        selector: ".open-cart",
        kind: CommandKind::OpenCart,
    },
    CommandRoute {
        selector: ".btn.add",
        kind: CommandKind::AddToCart,
    },
    CommandRoute {
        selector: "#clearCart",
        kind: CommandKind::ClearCart,
    },
    CommandRoute {
        selector: "#checkoutBtn",
        kind: CommandKind::Checkout,
    },
];

/// Pick the first route whose selector resolves, given a resolver that
/// returns the matched element (the click target or an ancestor) for a
/// selector. The matched element is handed back with the command.
pub fn route_click<T, F>(mut resolve: F) -> Option<(CommandKind, T)>
where
    F: FnMut(&str) -> Option<T>,
{
    CLICK_ROUTES
        .iter()
        .find_map(|route| resolve(route.selector).map(|found| (route.kind, found)))
}
