use crate::audio;
use crate::core::{AppConfig, Board, LetterCategory, Tile};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn tile_element(
    document: &web::Document,
    tile: &Tile,
    config: &AppConfig,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let cl = el.class_list();
    _ = cl.add_2(&config.tile_class, tile.category().css_class());
    let mut buf = [0u8; 4];
    let glyph = tile.glyph().encode_utf8(&mut buf);
    el.set_text_content(Some(glyph));
    _ = el.set_attribute("data-glyph", glyph);
    Ok(el)
}

/// Replace the container's children with one clickable element per tile,
/// in collection order. A tile that cannot be built is logged and skipped.
/// Returns how many were rendered.
pub fn render_all(
    document: &web::Document,
    container: &web::Element,
    board: &Rc<RefCell<Board>>,
    config: &AppConfig,
) -> usize {
    container.set_inner_html("");
    let tiles: Vec<Tile> = board.borrow().tiles.iter().cloned().collect();
    let mut rendered = 0usize;
    for tile in &tiles {
        let el = match tile_element(document, tile, config) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[tiles] skipping {}: {:?}", tile.glyph(), e);
                continue;
            }
        };
        let board_click = board.clone();
        let glyph = tile.glyph();
        dom::add_click_listener(&el, move |ev: web::MouseEvent| {
            // primary button only
            if ev.button() != 0 {
                return;
            }
            let request = board_click.borrow().tile_clicked(glyph);
            match request {
                Ok(req) => audio::play_logged(&req),
                Err(e) => log::warn!("[tiles] {}", e),
            }
        });
        if let Err(e) = container.append_child(&el) {
            log::warn!("[tiles] could not attach {}: {:?}", glyph, e);
            continue;
        }
        rendered += 1;
    }
    let b = board.borrow();
    log::info!(
        "[tiles] rendered {}/{} (vowels={} consonants={} signs={})",
        rendered,
        tiles.len(),
        b.tiles.by_category(LetterCategory::Vowel).len(),
        b.tiles.by_category(LetterCategory::Consonant).len(),
        b.tiles.by_category(LetterCategory::Sign).len()
    );
    rendered
}
