use crate::core::{percent_label, AppConfig, Board, Theme};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Put the document root into the visual mode for `theme`.
pub fn apply_theme(document: &web::Document, theme: Theme, config: &AppConfig) {
    let Some(body) = document.body() else {
        log::debug!("[theme] no <body>; nothing to style");
        return;
    };
    let cl = body.class_list();
    if theme.uses_light_class() {
        _ = cl.add_1(&config.light_theme_class);
    } else {
        _ = cl.remove_1(&config.light_theme_class);
    }
}

#[inline]
fn set_label(label: &web::Element, gain: f32) {
    label.set_text_content(Some(&percent_label(gain)));
}

/// Populate the slider and label from the current gain and keep them in sync
/// with user input. Needs both elements; otherwise the feature is skipped.
pub fn wire_volume(document: &web::Document, board: &Rc<RefCell<Board>>, config: &AppConfig) {
    let slider = dom::optional_element(document, &config.ids.volume_slider)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());
    let label = dom::optional_element(document, &config.ids.volume_label);
    let (Some(slider), Some(label)) = (slider, label) else {
        return;
    };

    let gain = board.borrow().volume.volume();
    slider.set_value(&gain.to_string());
    set_label(&label, gain);

    let board_input = board.clone();
    let slider_input = slider.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let raw = slider_input.value();
        match raw.trim().parse::<f32>() {
            Ok(v) => {
                let stored = board_input.borrow_mut().volume.set_volume(v);
                set_label(&label, stored);
            }
            Err(_) => log::warn!("[volume] ignoring slider value {:?}", raw),
        }
    }) as Box<dyn FnMut(_)>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
