pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod controls;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::{AppConfig, Board, Command, Outcome};
    use crate::{audio, controls, dom, overlay, render, storage};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("abetka-web starting");

        let document = match dom::window_document() {
            Some(d) => d,
            None => {
                log::error!("[boot] no window/document");
                return Ok(());
            }
        };
        // The module may load before or after the page finishes parsing.
        if document.ready_state() == "loading" {
            let doc = document.clone();
            let closure = Closure::once(move || run(&doc));
            _ = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        } else {
            run(&document);
        }
        Ok(())
    }

    fn run(document: &web::Document) {
        if let Err(e) = init(document, AppConfig::default()) {
            log::error!("[boot] init error: {:?}", e);
        }
    }

    fn run_command(
        document: &web::Document,
        board: &Rc<RefCell<Board>>,
        config: &AppConfig,
        cmd: Command,
    ) {
        let outcome = board.borrow_mut().dispatch(cmd, &mut rand::thread_rng());
        match outcome {
            Ok(Outcome::Play(req)) => audio::play_logged(&req),
            Ok(Outcome::ThemeChanged(theme)) => controls::apply_theme(document, theme, config),
            Err(e) => log::warn!("[boot] {:?} skipped: {}", cmd, e),
        }
    }

    fn init(document: &web::Document, config: AppConfig) -> anyhow::Result<()> {
        let store = storage::open_store();
        let board = Rc::new(RefCell::new(Board::new(&config, store)));
        let config = Rc::new(config);

        if let Some(container) = dom::optional_element(document, &config.ids.container) {
            if render::render_all(document, &container, &board, &config) == 0 {
                log::error!("[tiles] nothing rendered into #{}", config.ids.container);
            }
        }

        let theme = board.borrow().theme.current();
        controls::apply_theme(document, theme, &config);
        controls::wire_volume(document, &board, &config);
        overlay::wire_settings_panel(document, &board, &config);

        for (id, cmd) in [
            (config.ids.random_button.clone(), Command::PlayRandom),
            (config.ids.theme_toggle.clone(), Command::ToggleTheme),
        ] {
            let doc = document.clone();
            let board_cmd = board.clone();
            let config_cmd = config.clone();
            dom::add_click_listener_by_id(document, &id, move || {
                run_command(&doc, &board_cmd, &config_cmd, cmd);
            });
        }

        log::info!("[boot] ready with {} tiles", board.borrow().tiles.len());
        Ok(())
    }
}
