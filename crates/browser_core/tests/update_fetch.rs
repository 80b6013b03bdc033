use browser_core::{
    update, AppState, Effect, ErrorKind, Msg, QuestionPage, Record, RequestSeq,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    browser_logging::initialize_for_tests();
}

fn seq_of(effects: &[Effect]) -> RequestSeq {
    match effects {
        [Effect::Fetch { seq, .. }] => *seq,
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

fn page(total: u64, titles: &[&str]) -> QuestionPage {
    QuestionPage {
        items: titles
            .iter()
            .map(|title| Record {
                title: title.to_string(),
                type_id: "ANAGRAM".to_string(),
            })
            .collect(),
        total,
    }
}

fn complete(state: AppState, seq: RequestSeq, result: Result<QuestionPage, ErrorKind>) -> AppState {
    let (state, effects) = update(state, Msg::FetchCompleted { seq, result });
    assert!(effects.is_empty());
    state
}

fn titles(state: &AppState) -> Vec<String> {
    state
        .results()
        .items
        .iter()
        .map(|record| record.title.clone())
        .collect()
}

#[test]
fn successful_fetch_replaces_items_and_clears_loading() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SessionStarted);
    let seq = seq_of(&effects);
    assert!(state.results().loading);

    let state = complete(state, seq, Ok(page(7, &["a", "b"])));
    let results = state.results();
    assert_eq!(titles(&state), vec!["a", "b"]);
    assert_eq!(results.total_count, 7);
    assert!(!results.loading);
    assert_eq!(results.error, None);
}

#[test]
fn out_of_order_completion_keeps_fresher_result() {
    init_logging();
    // A is issued first, B second; B completes before A.
    let (state, effects) = update(AppState::new(), Msg::SearchChanged("a".into()));
    let seq_a = seq_of(&effects);
    let (state, effects) = update(state, Msg::SearchChanged("ab".into()));
    let seq_b = seq_of(&effects);
    assert!(seq_b > seq_a);

    let state = complete(state, seq_b, Ok(page(1, &["from B"])));
    let state = complete(state, seq_a, Ok(page(40, &["from A", "more A"])));

    assert_eq!(titles(&state), vec!["from B"]);
    assert_eq!(state.results().total_count, 1);
    assert!(!state.results().loading);
}

#[test]
fn stale_completion_does_not_touch_loading_of_newer_fetch() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchChanged("a".into()));
    let seq_a = seq_of(&effects);
    let (state, _) = update(state, Msg::SearchChanged("ab".into()));

    let state = complete(state, seq_a, Ok(page(3, &["from A"])));
    assert!(state.results().loading);
    assert!(titles(&state).is_empty());

    let state = complete(state, seq_a, Err(ErrorKind::ServerUnavailable));
    assert!(state.results().loading);
    assert_eq!(state.results().error, None);
}

#[test]
fn failure_keeps_last_good_items() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SessionStarted);
    let state = complete(state, seq_of(&effects), Ok(page(2, &["kept", "rows"])));

    let (state, effects) = update(state, Msg::SearchChanged("zzz".into()));
    let state = complete(state, seq_of(&effects), Err(ErrorKind::ServerUnavailable));

    let view = state.view();
    assert_eq!(view.error, Some(ErrorKind::ServerUnavailable));
    assert!(!view.loading);
    assert_eq!(titles(&state), vec!["kept", "rows"]);
    assert_eq!(view.total_count, 2);
}

#[test]
fn new_fetch_clears_previous_error() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SessionStarted);
    let state = complete(state, seq_of(&effects), Err(ErrorKind::ServerUnavailable));
    assert_eq!(state.results().error, Some(ErrorKind::ServerUnavailable));

    let (state, effects) = update(state, Msg::RefreshRequested);
    assert!(state.results().loading);
    assert_eq!(state.results().error, None);

    let state = complete(state, seq_of(&effects), Ok(page(1, &["back"])));
    assert_eq!(state.results().error, None);
    assert_eq!(titles(&state), vec!["back"]);
}

#[test]
fn duplicate_completion_is_applied_once() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SessionStarted);
    let seq = seq_of(&effects);
    let mut state = complete(state, seq, Ok(page(1, &["once"])));
    assert!(state.consume_dirty());

    // Same seq again: still the latest, so it re-applies identical data.
    let mut state = complete(state, seq, Ok(page(1, &["once"])));
    assert_eq!(titles(&state), vec!["once"]);
    assert!(state.consume_dirty());
}

#[test]
fn unknown_sequence_numbers_are_dropped() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SessionStarted);
    let seq = seq_of(&effects);

    let state = complete(state, seq + 5, Ok(page(9, &["ghost"])));
    assert!(titles(&state).is_empty());
    assert!(state.results().loading);
}

#[test]
fn rapid_typing_applies_only_the_last_issued_result() {
    init_logging();
    let mut state = AppState::new();
    let mut issued = Vec::new();
    for text in ["b", "br", "bre", "brea", "bread"] {
        let (next, effects) = update(state, Msg::SearchChanged(text.into()));
        issued.push((seq_of(&effects), text));
        state = next;
    }

    // Complete in reverse issue order.
    for (seq, text) in issued.iter().rev() {
        state = complete(state, *seq, Ok(page(1, &[*text])));
    }

    assert_eq!(titles(&state), vec!["bread"]);
    assert!(!state.results().loading);
}
