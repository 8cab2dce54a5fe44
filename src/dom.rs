use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an optional integration point; absence is logged, not an error.
pub fn optional_element(document: &web::Document, element_id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(element_id);
    if el.is_none() {
        log::debug!("[boot] #{} not present; feature skipped", element_id);
    }
    el
}

#[inline]
pub fn add_click_listener(el: &web::EventTarget, handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Bind a click on the element with `element_id`, if the page has one.
/// Returns whether the listener was attached.
pub fn add_click_listener_by_id(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    match optional_element(document, element_id) {
        Some(el) => {
            add_click_listener(&el, move |_| handler());
            true
        }
        None => false,
    }
}

/// Whether an event target is `el` itself or one of its descendants.
pub fn target_within(el: &web::Element, target: Option<web::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|node| el.contains(Some(&node)))
        .unwrap_or(false)
}

/// Show or hide via `style.display` only, leaving other inline styles alone.
pub fn set_display(el: &web::Element, visible: bool) {
    let value = if visible { "block" } else { "none" };
    match el.dyn_ref::<web::HtmlElement>() {
        Some(html) => {
            _ = html.style().set_property("display", value);
        }
        None => {
            _ = el.set_attribute("style", &format!("display:{}", value));
        }
    }
}
