//! Accessibility helpers.

/// Update the polite live region, if the page provides one.
///
/// Writes to `#shopfront-status`; pages without it simply get no
/// announcement.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::by_id("shopfront-status") {
        node.set_text_content(Some(msg));
    }
}

/// Lock or release page scrolling while the cart drawer is open.
pub fn lock_scroll(locked: bool) {
    let Some(root) = crate::dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|el| wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(el).ok())
    else {
        return;
    };
    let _ = root
        .style()
        .set_property("overflow", if locked { "hidden" } else { "" });
}
