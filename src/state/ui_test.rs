use super::*;

#[test]
fn defaults_to_light_mode() {
    assert!(!UiState::default().dark_mode);
}
