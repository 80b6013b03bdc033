use std::sync::Arc;
use std::time::Duration;

use browser_app::App;
use browser_core::{Category, ErrorKind, Msg, QueryState};
use browser_engine::{
    EngineHandle, FailureKind, FetchError, Fetcher, QueryParams, Question, QuestionPage,
};

const TITLES: [(&str, &str); 7] = [
    ("Banana Bread", "MCQ"),
    ("Anagram of listen", "ANAGRAM"),
    ("Read along: the banyan tree", "READ_ALONG"),
    ("Planets", "CONTENT_ONLY"),
    ("Canal locks", "MCQ"),
    ("Bandwidth basics", "MCQ"),
    ("Oceans", "READ_ALONG"),
];

/// In-memory backend filtering by substring and type, then paginating.
/// A search for "down" simulates an outage.
struct Catalog;

#[async_trait::async_trait]
impl Fetcher for Catalog {
    async fn fetch(&self, params: &QueryParams) -> Result<QuestionPage, FetchError> {
        if params.search == "down" {
            return Err(FetchError {
                kind: FailureKind::HttpStatus(503),
                message: "unavailable".to_string(),
            });
        }
        let needle = params.search.to_lowercase();
        let matching: Vec<Question> = TITLES
            .iter()
            .filter(|(title, _)| title.to_lowercase().contains(&needle))
            .filter(|(_, kind)| params.types.is_empty() || params.types.iter().any(|t| t == kind))
            .map(|(title, kind)| Question {
                title: title.to_string(),
                kind: kind.to_string(),
            })
            .collect();
        let start = ((params.page - 1) * params.limit) as usize;
        Ok(QuestionPage {
            total: matching.len() as u64,
            questions: matching
                .into_iter()
                .skip(start)
                .take(params.limit as usize)
                .collect(),
        })
    }
}

fn app() -> App<Vec<u8>> {
    browser_logging::initialize_for_tests();
    let engine = EngineHandle::with_fetcher(Arc::new(Catalog)).expect("engine");
    App::new(QueryState::new(), engine, Vec::new())
}

fn settle(app: &mut App<Vec<u8>>) {
    assert!(app.wait_idle(Duration::from_secs(5)).expect("io"));
}

fn titles(app: &App<Vec<u8>>) -> Vec<String> {
    app.state()
        .results()
        .items
        .iter()
        .map(|record| record.title.clone())
        .collect()
}

fn output(app: &App<Vec<u8>>) -> String {
    String::from_utf8_lossy(app.output()).into_owned()
}

#[test]
fn session_loads_first_page() {
    let mut app = app();
    app.dispatch(Msg::SessionStarted).expect("io");
    settle(&mut app);

    assert_eq!(app.state().results().total_count, 7);
    assert_eq!(titles(&app).len(), 5);
    assert_eq!(app.state().last_page(), 2);
    assert!(output(&app).contains("Page 1 of 2 (7 total)"));
}

#[test]
fn search_highlights_matches_in_output() {
    let mut app = app();
    app.dispatch(Msg::SessionStarted).expect("io");
    app.dispatch(Msg::SearchChanged("an".into())).expect("io");
    settle(&mut app);

    let out = output(&app);
    assert!(out.contains("B[an][an]a Bread"), "{out}");
    assert!(out.contains("[An]agram of listen"), "{out}");
}

#[test]
fn type_filter_and_navigation() {
    let mut app = app();
    app.dispatch(Msg::SessionStarted).expect("io");
    settle(&mut app);

    app.dispatch(Msg::NextClicked).expect("io");
    settle(&mut app);
    assert_eq!(app.state().query().page(), 2);
    assert_eq!(titles(&app), vec!["Bandwidth basics", "Oceans"]);

    app.dispatch(Msg::TypeToggled(Category::Mcq)).expect("io");
    settle(&mut app);
    assert_eq!(app.state().query().page(), 1);
    assert_eq!(
        titles(&app),
        vec!["Banana Bread", "Canal locks", "Bandwidth basics"]
    );
    assert!(!app.state().view().can_go_next);
}

#[test]
fn outage_keeps_last_good_rows_and_shows_banner() {
    let mut app = app();
    app.dispatch(Msg::SessionStarted).expect("io");
    settle(&mut app);
    let before = titles(&app);

    app.dispatch(Msg::SearchChanged("down".into())).expect("io");
    settle(&mut app);

    assert_eq!(app.state().results().error, Some(ErrorKind::ServerUnavailable));
    assert_eq!(titles(&app), before);
    assert!(output(&app).contains(browser_app::render::SERVER_UNAVAILABLE_TEXT));
}

#[test]
fn fast_typing_settles_on_last_query() {
    let mut app = app();
    for text in ["p", "pl", "pla", "plan"] {
        app.dispatch(Msg::SearchChanged(text.into())).expect("io");
    }
    settle(&mut app);
    // Late completions for earlier queries must not overwrite the result.
    std::thread::sleep(Duration::from_millis(50));
    app.pump_engine().expect("io");

    assert_eq!(titles(&app), vec!["Planets"]);
    assert_eq!(app.state().results().total_count, 1);
}
