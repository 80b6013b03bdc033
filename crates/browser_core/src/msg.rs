use crate::{Category, ErrorKind, QuestionPage, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session opened; issues the fetch for the initial query.
    SessionStarted,
    /// User edited the search box.
    SearchChanged(String),
    /// User picked a page size.
    PageSizeChanged(u32),
    /// User checked or unchecked a type filter box.
    TypeToggled(Category),
    /// User clicked Previous.
    PreviousClicked,
    /// User clicked Next.
    NextClicked,
    /// User asked for a specific page.
    PageRequested(u32),
    /// User asked to re-run the current query.
    RefreshRequested,
    /// Fetch collaborator finished a request.
    FetchCompleted {
        seq: RequestSeq,
        result: Result<QuestionPage, ErrorKind>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
