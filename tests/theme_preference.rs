//! Integration tests for theme resolution and the persisted preference slot.

use beurs_cowboy::theme::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeController, ThemePreference,
};

#[test]
/// What: A stored preference wins over every ambient value
fn stored_preference_ignores_ambient() {
    for ambient in [None, Some(ThemePreference::Light), Some(ThemePreference::Dark)] {
        let store = MemoryPreferenceStore::new(Some(ThemePreference::Dark));
        let mut theme = ThemeController::new(store, ambient);
        assert_eq!(theme.current_theme(), ThemePreference::Dark);
        assert!(!theme.on_ambient_change(ThemePreference::Light));
        assert_eq!(theme.current_theme(), ThemePreference::Dark);
    }
}

#[test]
/// What: Without a stored value the ambient preference is followed until a toggle
fn ambient_followed_until_explicit_toggle() {
    let mut theme = ThemeController::new(MemoryPreferenceStore::default(), None);
    assert_eq!(theme.current_theme(), ThemePreference::Light);
    assert!(theme.on_ambient_change(ThemePreference::Dark));
    assert_eq!(theme.current_theme(), ThemePreference::Dark);

    assert_eq!(theme.toggle(), ThemePreference::Light);
    assert!(theme.has_explicit_preference());
    assert!(!theme.on_ambient_change(ThemePreference::Dark));
    assert_eq!(theme.current_theme(), ThemePreference::Light);
}

#[test]
/// What: A toggle is written to the single-slot file and read back by a new controller
///
/// - Input: Fresh file store, toggle from Light
/// - Output: File holds `dark`; a second controller starts Dark despite a Light ambient
fn toggle_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("theme");

    let mut theme = ThemeController::new(FilePreferenceStore::new(path.clone()), None);
    theme.toggle();
    assert_eq!(std::fs::read_to_string(&path).expect("read").trim(), "dark");

    let store = FilePreferenceStore::new(path);
    assert_eq!(store.load(), Some(ThemePreference::Dark));
    let theme = ThemeController::new(store, Some(ThemePreference::Light));
    assert_eq!(theme.current_theme(), ThemePreference::Dark);
}
