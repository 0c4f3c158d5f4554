use super::*;

#[test]
fn start_raises_loading_and_clears_error() {
    let mut state = LoadingState {
        loading: false,
        error: Some("old".to_owned()),
    };
    state.start();
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn finish_lowers_loading_without_touching_error() {
    let mut state = LoadingState::default();
    state.start();
    state.finish();
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn fail_records_message_and_stops_loading() {
    let mut state = LoadingState::default();
    state.start();
    state.fail("nope");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("nope"));

    state.clear_error();
    assert_eq!(state.error, None);
}
