use super::prefs::Preferences;

// Host page integration points. Every one of them is optional.
pub const ALPHABET_CONTAINER_ID: &str = "alphabet";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const RANDOM_BUTTON_ID: &str = "randomLetterButton";
pub const VOLUME_SLIDER_ID: &str = "volumeSlider";
pub const VOLUME_LABEL_ID: &str = "volumeValue";
pub const SETTINGS_BUTTON_ID: &str = "settingsButton";
pub const SETTINGS_PANEL_ID: &str = "settingsPanel";

// Styling hooks
pub const LIGHT_THEME_CLASS: &str = "light-theme";
pub const TILE_CLASS: &str = "letter";

// Audio resource convention: <dir>/<lowercase glyph>.<ext>
pub const SOUND_DIR: &str = "sound";
pub const SOUND_EXT: &str = "mp3";

/// Element ids the bootstrap looks up in the host document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub container: String,
    pub theme_toggle: String,
    pub random_button: String,
    pub volume_slider: String,
    pub volume_label: String,
    pub settings_button: String,
    pub settings_panel: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            container: ALPHABET_CONTAINER_ID.to_string(),
            theme_toggle: THEME_TOGGLE_ID.to_string(),
            random_button: RANDOM_BUTTON_ID.to_string(),
            volume_slider: VOLUME_SLIDER_ID.to_string(),
            volume_label: VOLUME_LABEL_ID.to_string(),
            settings_button: SETTINGS_BUTTON_ID.to_string(),
            settings_panel: SETTINGS_PANEL_ID.to_string(),
        }
    }
}

/// Application configuration, built once by the bootstrap and passed down
/// to whatever needs a piece of it.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub ids: ElementIds,
    pub light_theme_class: String,
    pub tile_class: String,
    pub sound_dir: String,
    pub sound_ext: String,
    /// Used when storage has no (or an unusable) value.
    pub defaults: Preferences,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            light_theme_class: LIGHT_THEME_CLASS.to_string(),
            tile_class: TILE_CLASS.to_string(),
            sound_dir: SOUND_DIR.to_string(),
            sound_ext: SOUND_EXT.to_string(),
            defaults: Preferences::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the audio resource path for a glyph, e.g. `sound/а.mp3` for `А`.
    pub fn sound_path(&self, glyph: char) -> String {
        let lower: String = glyph.to_lowercase().collect();
        format!("{}/{}.{}", self.sound_dir, lower, self.sound_ext)
    }
}
