//! Question browser core: pure query-state machine and view-model helpers.
mod category;
mod effect;
mod highlight;
mod msg;
pub mod pagination;
mod query;
mod state;
mod type_filter;
mod update;
mod view_model;

pub use category::{Category, CATEGORIES};
pub use effect::Effect;
pub use highlight::{highlight, Segment};
pub use msg::Msg;
pub use pagination::PageMove;
pub use query::{FetchRequest, QueryError, QueryState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use state::{AppState, ErrorKind, QuestionPage, Record, RequestSeq, ResultState};
pub use type_filter::TypeFilter;
pub use update::update;
pub use view_model::{AppViewModel, CategoryOption, RecordRowView};
