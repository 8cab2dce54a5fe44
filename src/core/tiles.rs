use fnv::FnvHashMap;
use rand::seq::SliceRandom;
use rand::Rng;

const VOWELS: [char; 10] = ['А', 'Е', 'Є', 'И', 'І', 'Ї', 'О', 'У', 'Ю', 'Я'];
const SOFT_SIGN: char = 'Ь';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LetterCategory {
    Vowel,
    Consonant,
    Sign,
}

impl LetterCategory {
    pub fn of(glyph: char) -> Self {
        let upper = glyph.to_uppercase().next().unwrap_or(glyph);
        if VOWELS.contains(&upper) {
            LetterCategory::Vowel
        } else if upper == SOFT_SIGN {
            LetterCategory::Sign
        } else {
            LetterCategory::Consonant
        }
    }

    /// Extra class put on rendered tiles.
    pub fn css_class(self) -> &'static str {
        match self {
            LetterCategory::Vowel => "vowel",
            LetterCategory::Consonant => "consonant",
            LetterCategory::Sign => "sign",
        }
    }
}

/// One alphabet entry. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    glyph: char,
    audio_path: String,
    category: LetterCategory,
}

impl Tile {
    pub fn new(glyph: char, audio_path: impl Into<String>) -> Self {
        Self {
            glyph,
            audio_path: audio_path.into(),
            category: LetterCategory::of(glyph),
        }
    }

    #[inline]
    pub fn glyph(&self) -> char {
        self.glyph
    }

    #[inline]
    pub fn audio_path(&self) -> &str {
        &self.audio_path
    }

    #[inline]
    pub fn category(&self) -> LetterCategory {
        self.category
    }

    /// What a click on this tile asks the audio layer to do.
    pub fn play_request(&self, gain: f32) -> PlayRequest {
        PlayRequest {
            glyph: self.glyph,
            path: self.audio_path.clone(),
            gain,
        }
    }
}

/// A single fire-and-forget sound: resource path plus gain.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayRequest {
    pub glyph: char,
    pub path: String,
    pub gain: f32,
}

/// Tiles in display order, with a glyph index for direct lookup.
#[derive(Clone, Debug, Default)]
pub struct TileCollection {
    tiles: Vec<Tile>,
    index: FnvHashMap<char, usize>,
}

impl TileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tile. A repeated glyph is still displayed, but lookup keeps
    /// pointing at the first occurrence.
    pub fn add(&mut self, tile: Tile) {
        let pos = self.tiles.len();
        if self.index.contains_key(&tile.glyph) {
            log::warn!("[tiles] duplicate glyph {}", tile.glyph);
        } else {
            self.index.insert(tile.glyph, pos);
        }
        self.tiles.push(tile);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn find(&self, glyph: char) -> Option<&Tile> {
        self.index.get(&glyph).and_then(|&i| self.tiles.get(i))
    }

    pub fn by_category(&self, category: LetterCategory) -> Vec<&Tile> {
        self.tiles
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Uniform pick; `None` when there is nothing to pick from.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Tile> {
        self.tiles.choose(rng)
    }
}

impl FromIterator<Tile> for TileCollection {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut c = TileCollection::new();
        for t in iter {
            c.add(t);
        }
        c
    }
}

impl<'a> IntoIterator for &'a TileCollection {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
