// Host-side tests for the tile model and the fixed alphabet.
// The browser glue is wasm-only; everything here runs against `core`.

use abetka_web::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn collection_of(n: usize) -> TileCollection {
    // Cyrillic capitals from А upward, all distinct.
    (0..n)
        .map(|i| {
            let g = char::from_u32(0x0410 + i as u32).unwrap();
            Tile::new(g, format!("sound/{i}.mp3"))
        })
        .collect()
}

#[test]
fn alphabet_has_33_letters_in_order() {
    let tiles = build_alphabet(&AppConfig::default());
    assert_eq!(tiles.len(), 33);
    let glyphs: Vec<char> = tiles.iter().map(Tile::glyph).collect();
    assert_eq!(glyphs, UKRAINIAN_ALPHABET.to_vec());
    assert_eq!(glyphs.first(), Some(&'А'));
    assert_eq!(glyphs.last(), Some(&'Я'));
}

#[test]
fn alphabet_paths_follow_sound_convention() {
    let tiles = build_alphabet(&AppConfig::default());
    assert_eq!(tiles.find('А').map(Tile::audio_path), Some("sound/а.mp3"));
    assert_eq!(tiles.find('Ґ').map(Tile::audio_path), Some("sound/ґ.mp3"));
    assert_eq!(tiles.find('Я').map(Tile::audio_path), Some("sound/я.mp3"));
    for t in &tiles {
        assert!(
            t.audio_path().starts_with("sound/") && t.audio_path().ends_with(".mp3"),
            "unexpected path {}",
            t.audio_path()
        );
    }
}

#[test]
fn alphabet_glyphs_are_unique() {
    let tiles = build_alphabet(&AppConfig::default());
    for (i, t) in tiles.iter().enumerate() {
        let first = tiles.iter().position(|o| o.glyph() == t.glyph());
        assert_eq!(first, Some(i), "duplicate glyph {}", t.glyph());
    }
}

#[test]
fn alphabet_category_split() {
    let tiles = build_alphabet(&AppConfig::default());
    let vowels: Vec<char> = tiles
        .by_category(LetterCategory::Vowel)
        .iter()
        .map(|t| t.glyph())
        .collect();
    assert_eq!(vowels, vec!['А', 'Е', 'Є', 'И', 'І', 'Ї', 'О', 'У', 'Ю', 'Я']);
    assert_eq!(tiles.by_category(LetterCategory::Sign).len(), 1);
    assert_eq!(tiles.by_category(LetterCategory::Consonant).len(), 22);
}

#[test]
fn add_preserves_insertion_order() {
    let mut c = TileCollection::new();
    c.add(Tile::new('В', "v"));
    c.add(Tile::new('А', "a"));
    c.add(Tile::new('Б', "b"));
    let glyphs: Vec<char> = c.iter().map(Tile::glyph).collect();
    assert_eq!(glyphs, vec!['В', 'А', 'Б']);
    assert_eq!(c.iter().nth(1).map(Tile::glyph), Some('А'));
    assert!(c.find('Г').is_none());
}

#[test]
fn pick_random_on_empty_is_none() {
    let c = TileCollection::new();
    let mut rng = StdRng::seed_from_u64(7);
    assert!(c.is_empty());
    assert!(c.pick_random(&mut rng).is_none());
}

#[test]
fn pick_random_is_roughly_uniform_over_32() {
    let c = collection_of(32);
    let mut rng = StdRng::seed_from_u64(42);
    let draws = 32_000;
    let mut counts: HashMap<char, usize> = HashMap::new();
    for _ in 0..draws {
        let t = c.pick_random(&mut rng).expect("non-empty");
        assert!(c.find(t.glyph()).is_some(), "picked a foreign tile");
        *counts.entry(t.glyph()).or_default() += 1;
    }
    assert_eq!(counts.len(), 32, "every tile should come up");
    let expected = draws / 32;
    for (g, n) in counts {
        assert!(
            n > expected * 7 / 10 && n < expected * 13 / 10,
            "glyph {g} drawn {n} times, expected about {expected}"
        );
    }
}

#[test]
fn play_request_carries_path_and_gain() {
    let t = Tile::new('Ж', "sound/ж.mp3");
    let req = t.play_request(0.3);
    assert_eq!(req.glyph, 'Ж');
    assert_eq!(req.path, "sound/ж.mp3");
    assert!((req.gain - 0.3).abs() < 1e-6);
}
