// Host-side tests for preferences, theme and volume controllers.

use abetka_web::core::*;
use std::rc::Rc;

fn store_with(entries: &[(&str, &str)]) -> Rc<MemoryStore> {
    Rc::new(MemoryStore::with_entries(entries.iter().copied()))
}

#[test]
fn empty_store_loads_defaults() {
    let store = MemoryStore::new();
    let prefs = Preferences::load(&store, Preferences::default());
    assert_eq!(prefs.theme, Theme::Dark);
    assert!((prefs.volume - 1.0).abs() < 1e-6);
    assert_eq!(percent_label(prefs.volume), "100%");
}

#[test]
fn persisted_values_are_used() {
    let store = store_with(&[(THEME_KEY, "light"), (VOLUME_KEY, "0.25")]);
    let prefs = Preferences::load(store.as_ref(), Preferences::default());
    assert_eq!(prefs.theme, Theme::Light);
    assert!((prefs.volume - 0.25).abs() < 1e-6);
}

#[test]
fn malformed_values_fall_back_to_defaults() {
    let store = store_with(&[(THEME_KEY, "sepia"), (VOLUME_KEY, "loud")]);
    let prefs = Preferences::load(store.as_ref(), Preferences::default());
    assert_eq!(prefs, Preferences::default());

    let store = store_with(&[(VOLUME_KEY, "NaN")]);
    let prefs = Preferences::load(store.as_ref(), Preferences::default());
    assert!((prefs.volume - 1.0).abs() < 1e-6);
}

#[test]
fn out_of_range_volume_is_clamped_on_load() {
    assert_eq!(parse_volume("-0.5"), Ok(0.0));
    assert_eq!(parse_volume("3"), Ok(1.0));
    assert_eq!(parse_volume(" 0.5 "), Ok(0.5));
    assert!(matches!(parse_volume(""), Err(PreferenceError::Volume(_))));
}

#[test]
fn theme_toggle_is_an_involution() {
    let store = Rc::new(MemoryStore::new());
    let mut theme = ThemeController::new(Theme::Dark, store.clone());

    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    assert!(theme.current().uses_light_class());

    assert_eq!(theme.toggle(), Theme::Dark);
    assert_eq!(theme.current(), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    assert!(!theme.current().uses_light_class());
}

#[test]
fn persisted_theme_survives_reload() {
    let store = Rc::new(MemoryStore::new());
    ThemeController::new(Theme::Dark, store.clone()).toggle();
    let prefs = Preferences::load(store.as_ref(), Preferences::default());
    assert_eq!(prefs.theme, Theme::Light);
}

#[test]
fn set_volume_updates_label_and_round_trips() {
    let store = Rc::new(MemoryStore::new());
    let mut volume = VolumeController::new(1.0, store.clone());
    volume.set_volume(0.42);
    assert_eq!(volume.label(), "42%");
    assert!((volume.volume() - 0.42).abs() < 1e-6);

    let raw = store.get(VOLUME_KEY).expect("volume persisted");
    let reread: f32 = raw.parse().expect("float");
    assert!((reread - 0.42).abs() < 1e-6, "persisted {raw}");
}

#[test]
fn set_volume_clamps_input() {
    let store = Rc::new(MemoryStore::new());
    let mut volume = VolumeController::new(0.5, store.clone());
    assert_eq!(volume.set_volume(1.7), 1.0);
    assert_eq!(volume.label(), "100%");
    assert_eq!(volume.set_volume(-1.0), 0.0);
    assert_eq!(volume.label(), "0%");
    assert_eq!(store.get(VOLUME_KEY).as_deref(), Some("0"));
}

#[test]
fn percent_label_rounds() {
    assert_eq!(percent_label(0.0), "0%");
    assert_eq!(percent_label(0.5), "50%");
    assert_eq!(percent_label(0.994), "99%");
    assert_eq!(percent_label(1.0), "100%");
}
