use super::prefs::{clamp_gain, KeyValueStore, VOLUME_KEY};
use std::rc::Rc;

/// Text shown next to the slider, e.g. `42%`.
#[inline]
pub fn percent_label(gain: f32) -> String {
    format!("{}%", (gain * 100.0).round() as i32)
}

/// Holds the playback gain used for every new sound.
pub struct VolumeController {
    gain: f32,
    store: Rc<dyn KeyValueStore>,
}

impl VolumeController {
    pub fn new(initial: f32, store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            gain: clamp_gain(initial),
            store,
        }
    }

    #[inline]
    pub fn volume(&self) -> f32 {
        self.gain
    }

    pub fn label(&self) -> String {
        percent_label(self.gain)
    }

    /// Clamp, remember and persist a new gain. Returns the value actually stored.
    pub fn set_volume(&mut self, v: f32) -> f32 {
        self.gain = clamp_gain(v);
        self.store.set(VOLUME_KEY, &self.gain.to_string());
        log::debug!("[volume] gain={:.2}", self.gain);
        self.gain
    }
}
