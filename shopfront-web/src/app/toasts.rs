//! Toast notifier: one board, one container, one pending timer.
use crate::components::{ToastStack, toast_stack};
use crate::dom::{self, Timeout};
use crate::i18n;
use shopfront_core::{TimingConfig, ToastBoard, ToastId, ToastMessage};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use web_sys::Element;
use yew::{AppHandle, Callback};

const WRAP_ID: &str = "toastWrap";

struct ToastInner {
    board: ToastBoard,
    on_view: HashMap<ToastId, Callback<()>>,
    view: Option<AppHandle<ToastStack>>,
    timer: Option<Timeout>,
}

pub struct ToastNotifier {
    me: Weak<Self>,
    fade_ms: u32,
    inner: RefCell<ToastInner>,
}

/// The `#toastWrap` container, created under `<body>` on first use.
fn ensure_wrap() -> Option<Element> {
    if let Some(wrap) = dom::by_id(WRAP_ID) {
        return Some(wrap);
    }
    let doc = dom::document()?;
    let wrap = doc.create_element("div").ok()?;
    wrap.set_id(WRAP_ID);
    wrap.set_class_name("toast-wrap");
    let _ = wrap.set_attribute("aria-live", "polite");
    let _ = wrap.set_attribute("aria-label", &i18n::t("toast.region"));
    dom::body()?.append_child(&wrap).ok()?;
    Some(wrap)
}

impl ToastNotifier {
    #[must_use]
    pub fn new(timing: &TimingConfig) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            me: me.clone(),
            fade_ms: timing.toast_fade_ms,
            inner: RefCell::new(ToastInner {
                board: ToastBoard::new(timing),
                on_view: HashMap::new(),
                view: None,
                timer: None,
            }),
        })
    }

    fn handler(&self, f: fn(&Self, ToastId)) -> Callback<ToastId> {
        let me = self.me.clone();
        Callback::from(move |id| {
            if let Some(this) = me.upgrade() {
                f(&this, id);
            }
        })
    }

    fn props(&self, board: &ToastBoard) -> toast_stack::Props {
        toast_stack::Props {
            toasts: board.entries().to_vec(),
            fade_ms: self.fade_ms,
            on_enter: self.handler(Self::pointer_enter),
            on_leave: self.handler(Self::pointer_leave),
            on_view: self.handler(Self::view),
        }
    }

    /// Show a toast; `on_view` runs when its action button is pressed.
    pub fn show(&self, message: ToastMessage, on_view: Callback<()>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.view.is_none() {
                let Some(wrap) = ensure_wrap() else {
                    log::debug!("no document body; toast dropped");
                    return;
                };
                let props = self.props(&inner.board);
                inner.view =
                    Some(yew::Renderer::<ToastStack>::with_root_and_props(wrap, props).render());
            }
            let id = inner.board.push(message, dom::now_ms());
            inner.on_view.insert(id, on_view);
        }
        self.sync();
    }

    fn pointer_enter(&self, id: ToastId) {
        self.inner.borrow_mut().board.pointer_enter(id);
        self.sync();
    }

    fn pointer_leave(&self, id: ToastId) {
        self.inner.borrow_mut().board.pointer_leave(id, dom::now_ms());
        self.sync();
    }

    fn view(&self, id: ToastId) {
        let callback = {
            let mut inner = self.inner.borrow_mut();
            inner.board.dismiss(id, dom::now_ms());
            inner.on_view.remove(&id)
        };
        if let Some(callback) = callback {
            callback.emit(());
        }
        self.sync();
    }

    /// Advance the board to now, re-render, and aim the timer at the next
    /// deadline.
    fn sync(&self) {
        let now = dom::now_ms();
        let mut inner = self.inner.borrow_mut();
        inner.timer = None;
        inner.board.advance(now);
        let ToastInner {
            board,
            on_view,
            view,
            timer,
        } = &mut *inner;
        on_view.retain(|id, _| board.get(*id).is_some());
        if let Some(view) = view.as_mut() {
            view.update(self.props(board));
        }
        *timer = board.next_deadline().and_then(|deadline| {
            let wait = u32::try_from(deadline.saturating_sub(now)).unwrap_or(u32::MAX);
            let me = self.me.clone();
            Timeout::new(wait, move || {
                if let Some(this) = me.upgrade() {
                    this.sync();
                }
            })
            .map_err(|e| log::warn!("toast timer not scheduled: {}", dom::js_error_message(&e)))
            .ok()
        });
    }
}
