use std::fmt;

use browser_logging::{browser_debug, browser_info};

use crate::view_model::{AppViewModel, CategoryOption, RecordRowView};
use crate::{highlight, pagination, FetchRequest, QueryState, CATEGORIES};

/// Sequence number tagging each issued fetch. Starts at 1.
pub type RequestSeq = u64;

/// One row of the remote collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    /// Category wire identifier as reported by the server.
    pub type_id: String,
}

/// A successful fetch result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionPage {
    pub items: Vec<Record>,
    pub total: u64,
}

/// Failure categories surfaced to the user. Transport, status and body
/// failures all collapse into `ServerUnavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ServerUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ServerUnavailable => write!(f, "server unavailable"),
        }
    }
}

/// What the last applied fetch produced. `loading` implies `error` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultState {
    pub items: Vec<Record>,
    pub total_count: u64,
    pub loading: bool,
    pub error: Option<ErrorKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: QueryState,
    results: ResultState,
    /// Highest sequence number handed out so far; 0 before the first fetch.
    latest_started: RequestSeq,
    last_applied: RequestSeq,
    /// Effective query of the latest started fetch.
    issued: Option<FetchRequest>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session state seeded with a non-default query.
    pub fn with_query(query: QueryState) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn results(&self) -> &ResultState {
        &self.results
    }

    pub fn latest_started(&self) -> RequestSeq {
        self.latest_started
    }

    pub fn last_page(&self) -> u32 {
        pagination::last_page(self.results.total_count, self.query.page_size())
    }

    pub fn view(&self) -> AppViewModel {
        let search = self.query.search_text();
        let total_count = self.results.total_count;
        let page = self.query.page();
        let page_size = self.query.page_size();

        AppViewModel {
            search_text: search.to_string(),
            page,
            page_size,
            last_page: self.last_page(),
            can_go_previous: pagination::can_go_previous(page),
            can_go_next: pagination::can_go_next(page, total_count, page_size),
            selected_types: self.query.types().normalized(),
            categories: CATEGORIES
                .iter()
                .map(|&category| CategoryOption {
                    category,
                    selected: self.query.types().contains(category),
                })
                .collect(),
            rows: self
                .results
                .items
                .iter()
                .map(|record| RecordRowView {
                    title: highlight(&record.title, search),
                    type_id: record.type_id.clone(),
                })
                .collect(),
            total_count,
            loading: self.results.loading,
            error: self.results.error,
        }
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Applies `edit` to the query and marks the state dirty if it changed.
    pub(crate) fn edit_query<R>(&mut self, edit: impl FnOnce(&mut QueryState) -> R) -> R {
        let before = self.query.clone();
        let out = edit(&mut self.query);
        if self.query != before {
            self.mark_dirty();
        }
        out
    }

    /// Starts a fetch for the current effective query.
    ///
    /// Without `force`, nothing happens when the effective query equals the
    /// one most recently issued.
    pub(crate) fn begin_fetch(&mut self, force: bool) -> Option<(RequestSeq, FetchRequest)> {
        let request = self.query.effective();
        if !force && self.issued.as_ref() == Some(&request) {
            return None;
        }

        self.latest_started += 1;
        let seq = self.latest_started;
        self.issued = Some(request.clone());
        self.results.loading = true;
        self.results.error = None;
        self.mark_dirty();
        browser_info!(
            "Fetch #{} page={} size={} search_len={} types={:?}",
            seq,
            request.page,
            request.page_size,
            request.search.len(),
            request.type_ids()
        );
        Some((seq, request))
    }

    /// Reconciles a fetch completion. Only the latest started fetch may
    /// apply; anything older is dropped without touching loading or error.
    pub(crate) fn apply_completion(
        &mut self,
        seq: RequestSeq,
        result: Result<QuestionPage, ErrorKind>,
    ) {
        if seq != self.latest_started || seq < self.last_applied {
            browser_debug!(
                "Dropping stale fetch #{} (latest started #{})",
                seq,
                self.latest_started
            );
            return;
        }

        match result {
            Ok(page) => {
                browser_debug!(
                    "Applying fetch #{}: {} items of {}",
                    seq,
                    page.items.len(),
                    page.total
                );
                self.results.items = page.items;
                self.results.total_count = page.total;
                self.results.error = None;
            }
            Err(kind) => {
                browser_info!("Fetch #{} failed: {}; keeping previous items", seq, kind);
                self.results.error = Some(kind);
            }
        }
        self.results.loading = false;
        self.last_applied = seq;
        self.mark_dirty();
    }
}
