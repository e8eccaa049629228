use super::LoadingState;
use super::GENERATION_FAILED_MESSAGE;
use crate::domain::models::AnalysisResult;

fn result() -> AnalysisResult {
    return AnalysisResult {
        refined_resume: "# Title".to_string(),
        key_matching_points: vec!["a".to_string()],
    };
}

#[test]
fn it_starts_idle() {
    let state = LoadingState::default();
    assert_eq!(state, LoadingState::Idle);
    assert!(state.can_submit());
}

#[test]
fn it_moves_through_success() {
    let mut state = LoadingState::default();

    assert!(state.start());
    assert!(state.is_processing());
    assert!(!state.can_submit());

    assert!(state.succeed(result()));
    assert_eq!(state.result(), Some(&result()));
    assert_eq!(state.error_message(), None);

    assert!(state.reset());
    assert_eq!(state, LoadingState::Idle);
}

#[test]
fn it_moves_through_error() {
    let mut state = LoadingState::default();

    assert!(state.start());
    assert!(state.fail());
    assert_eq!(state.error_message(), Some(GENERATION_FAILED_MESSAGE));
    assert_eq!(state.result(), None);
    assert!(state.can_submit());

    assert!(state.reset());
    assert_eq!(state, LoadingState::Idle);
}

#[test]
fn it_resubmits_from_error() {
    let mut state = LoadingState::Error(GENERATION_FAILED_MESSAGE.to_string());
    assert!(state.start());
    assert!(state.is_processing());
}

#[test]
fn it_refuses_a_second_start_while_processing() {
    let mut state = LoadingState::default();
    assert!(state.start());
    assert!(!state.start());
    assert!(state.is_processing());
}

#[test]
fn it_refuses_settlement_outside_processing() {
    let mut state = LoadingState::default();
    assert!(!state.succeed(result()));
    assert!(!state.fail());
    assert_eq!(state, LoadingState::Idle);

    let mut success = LoadingState::Success(result());
    assert!(!success.fail());
    assert!(!success.start());
    assert_eq!(success.result(), Some(&result()));
}

#[test]
fn it_refuses_reset_from_idle_and_processing() {
    let mut state = LoadingState::default();
    assert!(!state.reset());

    state.start();
    assert!(!state.reset());
    assert!(state.is_processing());
}
