use crate::core::{AppConfig, Board, ClickOrigin};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn click_origin(
    trigger: &web::Element,
    panel: &web::Element,
    target: Option<web::EventTarget>,
) -> ClickOrigin {
    if dom::target_within(trigger, target.clone()) {
        ClickOrigin::Trigger
    } else if dom::target_within(panel, target) {
        ClickOrigin::Panel
    } else {
        ClickOrigin::Outside
    }
}

/// Bind the settings trigger and click-outside dismissal. Needs both the
/// trigger and the panel to be present.
pub fn wire_settings_panel(
    document: &web::Document,
    board: &Rc<RefCell<Board>>,
    config: &AppConfig,
) {
    let trigger = dom::optional_element(document, &config.ids.settings_button);
    let panel = dom::optional_element(document, &config.ids.settings_panel);
    let (Some(trigger), Some(panel)) = (trigger, panel) else {
        return;
    };

    dom::set_display(&panel, board.borrow().panel.is_visible());

    let board_trigger = board.clone();
    let panel_trigger = panel.clone();
    dom::add_click_listener(&trigger, move |_| {
        let visible = board_trigger.borrow_mut().panel.on_trigger_click();
        dom::set_display(&panel_trigger, visible);
        log::debug!("[settings] visible={}", visible);
    });

    // The trigger's own click bubbles here too; `click_origin` keeps it from
    // being counted twice.
    let board_doc = board.clone();
    dom::add_click_listener(document, move |ev: web::MouseEvent| {
        let origin = click_origin(&trigger, &panel, ev.target());
        let mut b = board_doc.borrow_mut();
        let was_visible = b.panel.is_visible();
        let visible = b.panel.on_document_click(origin);
        drop(b);
        if was_visible != visible {
            dom::set_display(&panel, visible);
            log::debug!("[settings] dismissed");
        }
    });
}
