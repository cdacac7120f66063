//! In-page product search: `#searchForm`, `#siteSearch`, `#searchResults`.
use crate::app::cards;
use crate::components::{SearchPanel, search_panel};
use crate::dom::{self, Listener, Timeout};
use shopfront_core::{Debouncer, PanelState, SearchIndex, SubmitOutcome, TimingConfig};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::{AppHandle, Callback};

const FOUND: &str = "is-found";

pub struct ProductSearch {
    me: Weak<Self>,
    form: Element,
    input: HtmlInputElement,
    panel: HtmlElement,
    index: SearchIndex,
    timing: TimingConfig,
    pending: RefCell<Debouncer<String>>,
    debounce_timer: RefCell<Option<Timeout>>,
    view: RefCell<Option<AppHandle<SearchPanel>>>,
    listeners: RefCell<Vec<Listener>>,
}

fn scroll_to(el: &Element, block: ScrollLogicalPosition) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

impl ProductSearch {
    /// Index the catalog once and bind the search form. Returns `None` when
    /// any of the three search elements is missing.
    #[must_use]
    pub fn mount(timing: TimingConfig, max_results: usize) -> Option<Rc<Self>> {
        let (Some(form), Some(input), Some(panel)) = (
            dom::by_id("searchForm"),
            dom::by_id("siteSearch").and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
            dom::by_id("searchResults").and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        ) else {
            log::debug!("search form incomplete; search disabled");
            return None;
        };
        let index = SearchIndex::from_cards(&cards::index_cards(), max_results);
        log::debug!("indexed {} product cards", index.entries().len());

        let search = Rc::new_cyclic(|me| Self {
            me: me.clone(),
            form,
            input,
            panel,
            index,
            timing,
            pending: RefCell::new(Debouncer::new(u64::from(timing.search_debounce_ms))),
            debounce_timer: RefCell::new(None),
            view: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        search.bind();
        Some(search)
    }

    fn listen(&self, target: &web_sys::EventTarget, event: &'static str, f: fn(&Self, &Event)) {
        let me = self.me.clone();
        match Listener::new(target, event, move |e| {
            if let Some(this) = me.upgrade() {
                f(&this, &e);
            }
        }) {
            Ok(listener) => self.listeners.borrow_mut().push(listener),
            Err(e) => log::warn!("search {event} not bound: {}", dom::js_error_message(&e)),
        }
    }

    fn bind(&self) {
        self.listen(&self.input, "input", Self::on_input);
        self.listen(&self.form, "submit", Self::on_submit);
        if let Some(doc) = dom::document() {
            self.listen(&doc, "click", Self::on_document_click);
        }
    }

    fn on_input(&self, _e: &Event) {
        let now = dom::now_ms();
        self.pending.borrow_mut().push(self.input.value(), now);
        self.schedule(self.timing.search_debounce_ms);
    }

    fn schedule(&self, wait_ms: u32) {
        let me = self.me.clone();
        let timer = Timeout::new(wait_ms, move || {
            if let Some(this) = me.upgrade() {
                this.flush();
            }
        })
        .map_err(|e| log::warn!("search debounce not scheduled: {}", dom::js_error_message(&e)))
        .ok();
        *self.debounce_timer.borrow_mut() = timer;
    }

    /// Release the settled query, or wait out the rest of the debounce if
    /// the timer fired early.
    fn flush(&self) {
        let now = dom::now_ms();
        let (ready, deadline) = {
            let mut pending = self.pending.borrow_mut();
            (pending.poll(now), pending.deadline())
        };
        if let Some(query) = ready {
            self.show(self.index.panel_for_input(&query));
        } else if let Some(deadline) = deadline {
            self.schedule(u32::try_from(deadline.saturating_sub(now)).unwrap_or(u32::MAX));
        }
    }

    fn on_submit(&self, e: &Event) {
        e.prevent_default();
        self.pending.borrow_mut().cancel();
        *self.debounce_timer.borrow_mut() = None;
        match self.index.submit(&self.input.value()) {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Navigate(id) => self.navigate_to(&id),
            SubmitOutcome::NoMatches => self.show(PanelState::NoMatches),
        }
    }

    fn on_document_click(&self, e: &Event) {
        if !dom::event_within(e, &self.panel) && !dom::event_within(e, &self.form) {
            self.panel.set_hidden(true);
        }
    }

    fn select(&self, id: String) {
        self.navigate_to(&id);
        self.panel.set_hidden(true);
    }

    fn show(&self, state: PanelState) {
        self.panel.set_hidden(state.is_hidden());
        let on_select = {
            let me = self.me.clone();
            Callback::from(move |id: String| {
                if let Some(this) = me.upgrade() {
                    this.select(id);
                }
            })
        };
        let props = search_panel::Props { state, on_select };
        let mut view = self.view.borrow_mut();
        match view.as_mut() {
            Some(handle) => handle.update(props),
            None => {
                self.panel.set_inner_html("");
                let root: Element = self.panel.clone().into();
                *view = Some(
                    yew::Renderer::<SearchPanel>::with_root_and_props(root, props).render(),
                );
            }
        }
    }

    /// Scroll the card's section into view, then center and flash the card.
    fn navigate_to(&self, id: &str) {
        let Some(card) = dom::by_id(id) else {
            log::debug!("search target #{id} is gone");
            return;
        };
        let section = card
            .closest("section")
            .ok()
            .flatten()
            .or_else(|| dom::by_id("catalog"))
            .or_else(|| dom::body().map(Into::into));
        if let Some(section) = section {
            scroll_to(&section, ScrollLogicalPosition::Start);
        }
        let settle_ms = self.timing.scroll_settle_ms;
        let highlight_ms = self.timing.found_highlight_ms;
        wasm_bindgen_futures::spawn_local(async move {
            if dom::sleep_ms(settle_ms).await.is_err() {
                return;
            }
            let classes = card.class_list();
            let _ = classes.remove_1(FOUND);
            scroll_to(&card, ScrollLogicalPosition::Center);
            let _ = classes.add_1(FOUND);
            if dom::sleep_ms(highlight_ms).await.is_ok() {
                let _ = classes.remove_1(FOUND);
            }
        });
    }
}
