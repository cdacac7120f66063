use crate::i18n;
use shopfront_core::{ToastEntry, ToastId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Oldest first.
    pub toasts: Vec<ToastEntry>,
    pub fade_ms: u32,
    pub on_enter: Callback<ToastId>,
    pub on_leave: Callback<ToastId>,
    pub on_view: Callback<ToastId>,
}

#[function_component(ToastStack)]
pub fn toast_stack(p: &Props) -> Html {
    let leaving_style = format!(
        "transition: opacity {ms}ms ease, transform {ms}ms ease; opacity: 0; transform: translateY(8px);",
        ms = p.fade_ms
    );
    html! {
        <>
            { for p.toasts.iter().map(|toast| {
                let id = toast.id;
                let onmouseenter = p.on_enter.reform(move |_: MouseEvent| id);
                let onmouseleave = p.on_leave.reform(move |_: MouseEvent| id);
                let onclick = p.on_view.reform(move |_: MouseEvent| id);
                let leaving = toast.is_leaving();
                let style = leaving.then(|| leaving_style.clone());
                html! {
                    <div class={classes!("toast", leaving.then_some("is-leaving"))} key={id} {style} {onmouseenter} {onmouseleave}>
                        if !toast.message.img.is_empty() {
                            <img class="toast__img" src={toast.message.img.clone()} alt="" />
                        }
                        <div class="toast__body">
                            <span class="toast__title">{ &toast.message.title }</span>
                            <div>{ &toast.message.subtitle }</div>
                        </div>
                        <div class="toast__actions">
                            <button class="toast__btn" type="button" {onclick}>{ i18n::t("toast.view") }</button>
                        </div>
                    </div>
                }
            }) }
        </>
    }
}
