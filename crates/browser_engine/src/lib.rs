//! Question browser engine: HTTP fetch collaborator and background runner.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_page, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{build_query_url, FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{
    EngineEvent, FailureKind, FetchError, QueryParams, Question, QuestionPage, RequestId,
};
