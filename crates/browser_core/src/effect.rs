use crate::{FetchRequest, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `request` to the fetch collaborator and report back with `seq`.
    Fetch { seq: RequestSeq, request: FetchRequest },
}
