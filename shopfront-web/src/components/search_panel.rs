use crate::i18n;
use shopfront_core::PanelState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: PanelState,
    /// Card id of the chosen suggestion.
    pub on_select: Callback<String>,
}

#[function_component(SearchPanel)]
pub fn search_panel(p: &Props) -> Html {
    match &p.state {
        PanelState::Hidden => html! {},
        PanelState::NoMatches => html! {
            <div class="empty">{ i18n::t("search.empty") }</div>
        },
        PanelState::Suggestions(list) => html! {
            <div class="suggestions" role="listbox" aria-label={i18n::t("search.results")}>
                { for list.iter().map(|s| {
                    let cb = p.on_select.clone();
                    let id = s.id.clone();
                    let onclick = Callback::from(move |_| cb.emit(id.clone()));
                    html! {
                        <button type="button" role="option" key={s.id.clone()} {onclick}>{ &s.title }</button>
                    }
                }) }
            </div>
        },
    }
}
