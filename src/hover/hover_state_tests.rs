//! Tests for hover state

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::*;
use crate::hover::debouncer::HOVER_DEBOUNCE;

fn hover_lines(request_id: u64, word: &str) -> LookupResponse {
    LookupResponse::Hover {
        request_id,
        word: word.to_string(),
        lines: Some(vec![format!("# {}", word)]),
    }
}

/// State with a request already dispatched for `word`
fn requested(word: &str) -> (HoverState, u64) {
    let mut state = HoverState::new(true);
    let t0 = Instant::now();
    state.set_word_at(Some(word.to_string()), t0);
    let (_, id) = state.take_due_request_at(t0 + HOVER_DEBOUNCE).unwrap();
    (state, id)
}

#[test]
fn test_new_state() {
    let state = HoverState::new(false);
    assert!(!state.enabled);
    assert!(state.word().is_none());
    assert!(!state.should_show());
    assert!(HoverState::default().enabled);
}

#[test]
fn test_request_waits_for_debounce() {
    let mut state = HoverState::new(true);
    let t0 = Instant::now();
    state.set_word_at(Some("hello".to_string()), t0);

    assert!(state.take_due_request_at(t0).is_none());
    assert_eq!(
        state.take_due_request_at(t0 + HOVER_DEBOUNCE),
        Some(("hello".to_string(), 1))
    );
    assert!(state.is_loading());

    // Only one request per word change
    assert!(state.take_due_request_at(t0 + HOVER_DEBOUNCE * 2).is_none());
}

#[test]
fn test_same_word_does_not_reschedule() {
    let (mut state, _) = requested("hello");
    assert!(!state.set_word(Some("hello".to_string())));
    assert!(state.is_loading());
}

#[test]
fn test_disabled_state_never_requests() {
    let mut state = HoverState::new(false);
    let t0 = Instant::now();
    state.set_word_at(Some("hello".to_string()), t0);
    assert!(state.take_due_request_at(t0 + Duration::from_secs(1)).is_none());
}

#[test]
fn test_response_for_current_request_is_shown() {
    let (mut state, id) = requested("hello");

    assert_eq!(state.apply_response(hover_lines(id, "hello")), HoverUpdate::Shown);
    assert!(state.should_show());
    assert_eq!(state.lines().unwrap(), ["# hello".to_string()]);
    assert!(!state.is_loading());
}

#[test]
fn test_stale_response_is_ignored() {
    let (mut state, first_id) = requested("hello");

    // Cursor moves on before the first answer arrives
    let t1 = Instant::now();
    state.set_word_at(Some("world".to_string()), t1);
    let (_, second_id) = state.take_due_request_at(t1 + HOVER_DEBOUNCE).unwrap();
    assert_ne!(first_id, second_id);

    assert_eq!(
        state.apply_response(hover_lines(first_id, "hello")),
        HoverUpdate::Ignored
    );
    assert!(state.lines().is_none());

    assert_eq!(
        state.apply_response(hover_lines(second_id, "world")),
        HoverUpdate::Shown
    );
    assert_eq!(state.lines().unwrap()[0], "# world");
}

#[test]
fn test_response_after_leaving_word_is_ignored() {
    let (mut state, id) = requested("hello");
    state.set_word(None);

    assert_eq!(state.apply_response(hover_lines(id, "hello")), HoverUpdate::Ignored);
    assert!(!state.should_show());
}

#[test]
fn test_no_definitions_response() {
    let (mut state, id) = requested("qwxz");
    let response = LookupResponse::Hover {
        request_id: id,
        word: "qwxz".to_string(),
        lines: None,
    };

    assert_eq!(state.apply_response(response), HoverUpdate::NoDefinitions);
    assert!(!state.should_show());
}

#[test]
fn test_failed_response() {
    let (mut state, id) = requested("hello");
    let response = LookupResponse::Failed {
        request_id: id,
        word: "hello".to_string(),
        message: "Network error".to_string(),
    };

    assert_eq!(
        state.apply_response(response),
        HoverUpdate::Failed("Network error".to_string())
    );
    assert!(!state.is_loading());
}

#[test]
fn test_moving_to_new_word_clears_lines() {
    let (mut state, id) = requested("hello");
    state.apply_response(hover_lines(id, "hello"));

    state.set_word(Some("world".to_string()));
    assert!(state.lines().is_none());
}

#[test]
fn test_toggle_hides_and_restores() {
    let (mut state, id) = requested("hello");
    state.apply_response(hover_lines(id, "hello"));

    state.toggle();
    assert!(!state.should_show());
    state.toggle();
    assert!(state.should_show());
}

#[test]
fn test_abandon_request() {
    let (mut state, id) = requested("hello");
    state.abandon_request();

    assert!(!state.is_loading());
    assert_eq!(state.apply_response(hover_lines(id, "hello")), HoverUpdate::Ignored);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Whatever order responses arrive in, only the latest request is applied
    #[test]
    fn prop_only_latest_request_applies(words in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let mut state = HoverState::new(true);
        let mut ids = Vec::new();
        let mut now = Instant::now();

        for (i, word) in words.iter().enumerate() {
            // Suffix keeps consecutive words distinct
            state.set_word_at(Some(format!("{}{}", word, i)), now);
            now += HOVER_DEBOUNCE;
            let (_, id) = state.take_due_request_at(now).unwrap();
            ids.push(id);
        }

        let latest = *ids.last().unwrap();
        for &id in ids.iter().rev() {
            let update = state.apply_response(hover_lines(id, "w"));
            if id == latest {
                prop_assert_eq!(update, HoverUpdate::Shown);
            } else {
                prop_assert_eq!(update, HoverUpdate::Ignored);
            }
        }
    }
}
