use super::error::PreferenceError;
use super::prefs::{KeyValueStore, THEME_KEY};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Name used in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Whether the light-theme class belongs on the document root.
    #[inline]
    pub fn uses_light_class(self) -> bool {
        matches!(self, Theme::Light)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(PreferenceError::Theme(other.to_string())),
        }
    }
}

/// Owns the current theme and writes every change through to storage.
/// Applying the theme to the document is left to the caller.
pub struct ThemeController {
    current: Theme,
    store: Rc<dyn KeyValueStore>,
}

impl ThemeController {
    pub fn new(initial: Theme, store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            current: initial,
            store,
        }
    }

    #[inline]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip dark/light, persist the new name and return it.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(THEME_KEY, self.current.as_str());
        log::info!("[theme] switched to {}", self.current);
        self.current
    }
}
