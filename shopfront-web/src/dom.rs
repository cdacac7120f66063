use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Storage, Window};

/// The global `window`, if running in a browser context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The page document, if one is reachable.
#[must_use]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// The document `<body>`.
#[must_use]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Wall-clock milliseconds since the epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

fn timer_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if there is no window, the timer cannot be scheduled, or
/// the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timer_ms(duration_ms),
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// A pending `setTimeout`, cleared when dropped.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Run `f` once after `ms` milliseconds.
    ///
    /// # Errors
    /// Returns an error if there is no window or the timer cannot be scheduled.
    pub fn new(ms: u32, f: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let callback: Closure<dyn FnMut()> = Closure::once(f);
        let id = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timer_ms(ms),
        )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// A repeating `setInterval`, cleared when dropped.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Run `f` every `ms` milliseconds until dropped.
    ///
    /// # Errors
    /// Returns an error if there is no window or the interval cannot be scheduled.
    pub fn new(ms: u32, f: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let callback = Closure::<dyn FnMut()>::new(f);
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timer_ms(ms),
        )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

/// An event listener registration, removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `f` to `event` on `target`.
    ///
    /// # Errors
    /// Returns an error if the listener cannot be attached.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(f);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Keep the listener attached for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// The nearest ancestor-or-self of the event target matching `selector`.
#[must_use]
pub fn closest(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok().flatten()
}

/// Whether the event target sits inside `container`.
#[must_use]
pub fn event_within(event: &Event, container: &Element) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// All elements under `root` matching `selector`, in document order.
#[must_use]
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

/// All elements in the document matching `selector`, in document order.
#[must_use]
pub fn query_document(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

/// The first element in the document matching `selector`.
#[must_use]
pub fn query_one(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Element by id.
#[must_use]
pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

fn node_list_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Trimmed text content of the first descendant matching `selector`.
#[must_use]
pub fn child_text(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
}

/// Attribute of the first descendant matching `selector`.
#[must_use]
pub fn child_attr(root: &Element, selector: &str, attr: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute(attr))
}
