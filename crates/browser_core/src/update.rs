use browser_logging::{browser_debug, browser_warn};

use crate::pagination::{self, PageMove};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// At most one `Effect::Fetch` is returned per message, and only when the
/// effective query differs from the last one issued (or on refresh).
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => fetch_if_changed(&mut state),
        Msg::SearchChanged(text) => {
            state.edit_query(|query| query.set_search_text(text));
            fetch_if_changed(&mut state)
        }
        Msg::PageSizeChanged(page_size) => {
            match state.edit_query(|query| query.set_page_size(page_size)) {
                Ok(()) => fetch_if_changed(&mut state),
                Err(err) => {
                    browser_warn!("Ignoring page size {}: {}", page_size, err);
                    Vec::new()
                }
            }
        }
        Msg::TypeToggled(category) => {
            state.edit_query(|query| query.toggle_type(category));
            fetch_if_changed(&mut state)
        }
        Msg::PreviousClicked => navigate(&mut state, PageMove::Previous),
        Msg::NextClicked => navigate(&mut state, PageMove::Next),
        Msg::PageRequested(page) => {
            let total = state.results().total_count;
            let page_size = state.query().page_size();
            if pagination::is_in_range(page, total, page_size) {
                go_to_page(&mut state, page)
            } else {
                browser_debug!(
                    "Rejecting page {} outside 1..={}",
                    page,
                    state.last_page()
                );
                Vec::new()
            }
        }
        Msg::RefreshRequested => fetch(&mut state, true),
        Msg::FetchCompleted { seq, result } => {
            state.apply_completion(seq, result);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn navigate(state: &mut AppState, step: PageMove) -> Vec<Effect> {
    let target = pagination::resolve_move(
        state.query().page(),
        state.results().total_count,
        state.query().page_size(),
        step,
    );
    match target {
        Some(page) => go_to_page(state, page),
        None => {
            browser_debug!("Rejecting {:?} from page {}", step, state.query().page());
            Vec::new()
        }
    }
}

fn go_to_page(state: &mut AppState, page: u32) -> Vec<Effect> {
    match state.edit_query(|query| query.set_page(page)) {
        Ok(()) => fetch_if_changed(state),
        Err(err) => {
            browser_warn!("Ignoring page {}: {}", page, err);
            Vec::new()
        }
    }
}

fn fetch_if_changed(state: &mut AppState) -> Vec<Effect> {
    fetch(state, false)
}

fn fetch(state: &mut AppState, force: bool) -> Vec<Effect> {
    state
        .begin_fetch(force)
        .map(|(seq, request)| Effect::Fetch { seq, request })
        .into_iter()
        .collect()
}
