use super::error::PreferenceError;
use super::theme::Theme;
use std::cell::RefCell;
use std::collections::HashMap;

pub const THEME_KEY: &str = "theme";
pub const VOLUME_KEY: &str = "volume";

pub const DEFAULT_VOLUME: f32 = 1.0;

/// String-keyed scalar storage. Writes are best effort; implementations log
/// failures instead of returning them.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store used on the host and when the browser gives us no storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: RefCell::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preferences {
    pub theme: Theme,
    /// Gain in [0, 1].
    pub volume: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Preferences {
    /// Read both preferences, falling back to `defaults` for anything missing
    /// or malformed.
    pub fn load(store: &dyn KeyValueStore, defaults: Preferences) -> Self {
        let theme = match store.get(THEME_KEY).map(|raw| raw.parse::<Theme>()) {
            Some(Ok(t)) => t,
            Some(Err(e)) => {
                log::warn!("[prefs] {}; using {}", e, defaults.theme);
                defaults.theme
            }
            None => defaults.theme,
        };
        let volume = match store.get(VOLUME_KEY).map(|raw| parse_volume(&raw)) {
            Some(Ok(v)) => v,
            Some(Err(e)) => {
                log::warn!("[prefs] {}; using {}", e, defaults.volume);
                defaults.volume
            }
            None => defaults.volume,
        };
        Self { theme, volume }
    }
}

/// Parse a stored gain. Out-of-range values are clamped into [0, 1].
pub fn parse_volume(raw: &str) -> Result<f32, PreferenceError> {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(clamp_gain(v)),
        _ => Err(PreferenceError::Volume(raw.to_string())),
    }
}

#[inline]
pub fn clamp_gain(v: f32) -> f32 {
    if v.is_nan() {
        DEFAULT_VOLUME
    } else {
        v.clamp(0.0, 1.0)
    }
}
