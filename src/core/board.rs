use super::alphabet::build_alphabet;
use super::config::AppConfig;
use super::error::PlaybackError;
use super::panel::PanelToggle;
use super::prefs::{KeyValueStore, Preferences};
use super::theme::{Theme, ThemeController};
use super::tiles::{PlayRequest, TileCollection};
use super::volume::VolumeController;
use rand::Rng;
use std::rc::Rc;

/// Top-level actions bound to buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PlayRandom,
    ToggleTheme,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Play(PlayRequest),
    ThemeChanged(Theme),
}

/// All in-memory state of the page. Event handlers share it through
/// `Rc<RefCell<Board>>` and never hold a borrow across a browser call.
pub struct Board {
    pub tiles: TileCollection,
    pub theme: ThemeController,
    pub volume: VolumeController,
    pub panel: PanelToggle,
}

impl Board {
    pub fn new(config: &AppConfig, store: Rc<dyn KeyValueStore>) -> Self {
        let prefs = Preferences::load(store.as_ref(), config.defaults);
        log::info!(
            "[boot] prefs theme={} volume={:.2}",
            prefs.theme,
            prefs.volume
        );
        Self::with_tiles(build_alphabet(config), prefs, store)
    }

    pub fn with_tiles(
        tiles: TileCollection,
        prefs: Preferences,
        store: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            tiles,
            theme: ThemeController::new(prefs.theme, store.clone()),
            volume: VolumeController::new(prefs.volume, store),
            panel: PanelToggle::new(),
        }
    }

    /// Playback request for a clicked tile at the current gain.
    pub fn tile_clicked(&self, glyph: char) -> Result<PlayRequest, PlaybackError> {
        self.tiles
            .find(glyph)
            .map(|t| t.play_request(self.volume.volume()))
            .ok_or(PlaybackError::UnknownGlyph(glyph))
    }

    pub fn random_request<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PlayRequest, PlaybackError> {
        self.tiles
            .pick_random(rng)
            .map(|t| t.play_request(self.volume.volume()))
            .ok_or(PlaybackError::Empty)
    }

    pub fn dispatch<R: Rng + ?Sized>(
        &mut self,
        command: Command,
        rng: &mut R,
    ) -> Result<Outcome, PlaybackError> {
        match command {
            Command::PlayRandom => self.random_request(rng).map(Outcome::Play),
            Command::ToggleTheme => Ok(Outcome::ThemeChanged(self.theme.toggle())),
        }
    }
}
