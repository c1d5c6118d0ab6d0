use super::*;

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_theme_updates_in_place() {
    let mut state = UiState::default();
    state.theme = state.theme.opposite();
    assert_eq!(state.theme, Theme::Dark);
}
