use std::sync::Once;

use reader_core::{update, AppState, Msg, PreferenceSnapshot, ViewMode, DEFAULT_ZOOM};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

#[test]
fn restore_applies_view_and_zoom_without_persist_effects() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::RestorePreferences(PreferenceSnapshot {
            view: ViewMode::Text,
            zoom: 120,
        }),
    );

    // Restoring what came from disk must not write it back.
    assert!(effects.is_empty());
    assert_eq!(state.view_mode(), ViewMode::Text);
    assert_eq!(state.zoom(), 120);

    let view = state.view();
    assert!(view.text.visible);
    assert_eq!(view.image.zoom_class, "zoom-120");
}

#[test]
fn restore_with_unknown_zoom_keeps_default() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::RestorePreferences(PreferenceSnapshot {
            view: ViewMode::Image,
            zoom: 55,
        }),
    );

    assert_eq!(state.zoom(), DEFAULT_ZOOM);
}

#[test]
fn view_mode_parses_persisted_names() {
    assert_eq!(ViewMode::parse("image"), Some(ViewMode::Image));
    assert_eq!(ViewMode::parse("text"), Some(ViewMode::Text));
    assert_eq!(ViewMode::parse("split"), None);
    assert_eq!(ViewMode::Image.as_str(), "image");
    assert_eq!(ViewMode::Text.as_str(), "text");
}
