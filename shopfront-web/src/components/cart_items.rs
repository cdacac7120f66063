use crate::i18n;
use shopfront_core::{CartAction, CartRow};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Newest first.
    pub rows: Vec<CartRow>,
    pub currency: AttrValue,
    pub locale: AttrValue,
    pub on_action: Callback<CartAction>,
}

/// Resolve the row control a click landed on from its data markers.
fn action_from_click(e: &MouseEvent) -> Option<CartAction> {
    let control = e
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("[data-inc], [data-dec], [data-remove]")
        .ok()??;
    CartAction::from_markers(
        control.get_attribute("data-inc").as_deref(),
        control.get_attribute("data-dec").as_deref(),
        control.get_attribute("data-remove").as_deref(),
    )
}

#[function_component(CartItemList)]
pub fn cart_item_list(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(action) = action_from_click(&e) {
                cb.emit(action);
            }
        })
    };

    html! {
        <div class="cart-items-list" {onclick}>
            { for p.rows.iter().map(|row| render_row(row, &p.currency, &p.locale)) }
        </div>
    }
}

fn render_row(row: &CartRow, currency: &str, locale: &str) -> Html {
    let id = row.id.clone();
    html! {
        <div class="cart-item" data-id={id.clone()} key={id.clone()}>
            <img src={row.img.clone()} alt="" />
            <div>
                <p class="cart-title">{ &row.title }</p>
                <div class="qty" role="group" aria-label={i18n::t("cart.quantity")}>
                    <button class="qdec" type="button" data-dec={id.clone()} aria-label={i18n::t("cart.decrease")}>{ "–" }</button>
                    <input type="text" value={row.qty.to_string()} inputmode="numeric" aria-label={i18n::t("cart.quantity")} readonly={true} />
                    <button class="qinc" type="button" data-inc={id.clone()} aria-label={i18n::t("cart.increase")}>{ "+" }</button>
                </div>
            </div>
            <div class="item-actions">
                <div class="item-price">{ i18n::fmt_money(currency, row.price, locale) }</div>
                <button class="icon tiny danger" type="button" data-remove={id} aria-label={i18n::t("cart.remove")}>
                    <svg width="18" height="18" viewBox="0 0 24 24" aria-hidden="true">
                        <path fill="currentColor" d="M9 3h6a1 1 0 0 1 1 1v1h4a1 1 0 1 1 0 2h-1v12a3 3 0 0 1-3 3H8a3 3 0 0 1-3-3V7H4a1 1 0 1 1 0-2h4V4a1 1 0 0 1 1-1Zm1 3h4V5h-4v1ZM7 7v12a1 1 0 0 0 1 1h8a1 1 0 0 0 1-1V7H7Z" />
                    </svg>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn row(id: &str, qty: u32, price: u64) -> CartRow {
        CartRow {
            id: id.into(),
            title: format!("Item {id}"),
            img: String::new(),
            qty,
            price,
        }
    }

    fn props(rows: Vec<CartRow>) -> Props {
        Props {
            rows,
            currency: "NPR".into(),
            locale: "en-NP".into(),
            on_action: Callback::noop(),
        }
    }

    #[test]
    fn rows_render_in_given_order_with_controls() {
        crate::i18n::set_lang("en");
        let html = block_on(
            LocalServerRenderer::<CartItemList>::with_props(props(vec![
                row("new", 1, 1_200),
                row("old", 2, 500),
            ]))
            .render(),
        );
        let new_at = html.find("Item new").expect("new row");
        let old_at = html.find("Item old").expect("old row");
        assert!(new_at < old_at, "rows must keep newest-first order: {html}");
        assert!(html.contains("data-inc=\"new\""));
        assert!(html.contains("data-dec=\"old\""));
        assert!(html.contains("data-remove=\"old\""));
        assert!(html.contains("NPR 1,200"));
        assert!(html.contains("aria-label=\"Decrease\""));
    }

    #[test]
    fn empty_cart_renders_no_rows() {
        crate::i18n::set_lang("en");
        let html =
            block_on(LocalServerRenderer::<CartItemList>::with_props(props(Vec::new())).render());
        assert!(!html.contains("cart-item\""));
    }
}
