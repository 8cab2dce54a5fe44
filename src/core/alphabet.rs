use super::config::AppConfig;
use super::tiles::{Tile, TileCollection};

/// Ukrainian alphabet in display order.
pub const UKRAINIAN_ALPHABET: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Ґ', 'Д', 'Е', 'Є', 'Ж', 'З', 'И', 'І', 'Ї', 'Й', 'К', 'Л', 'М', 'Н', 'О',
    'П', 'Р', 'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ь', 'Ю', 'Я',
];

/// Build the board's tiles, each paired with its pronunciation resource.
pub fn build_alphabet(config: &AppConfig) -> TileCollection {
    UKRAINIAN_ALPHABET
        .iter()
        .map(|&g| Tile::new(g, config.sound_path(g)))
        .collect()
}
