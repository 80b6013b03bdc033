use browser_core::{Effect, ErrorKind, FetchRequest, Msg, QuestionPage, Record};
use browser_engine::{EngineEvent, EngineHandle, QueryParams};
use browser_logging::browser_info;

/// Executes core effects on the engine and turns engine events back into
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { seq, request } => {
                    browser_info!(
                        "Fetch seq={} page={} limit={} search={:?}",
                        seq,
                        request.page,
                        request.page_size,
                        request.search
                    );
                    self.engine.fetch(seq, to_params(&request));
                }
            }
        }
    }

    /// Drains every completion the engine has reported so far.
    pub fn drain(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    /// Waits up to `timeout` for the next completion.
    pub fn next_timeout(&self, timeout: std::time::Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

pub fn to_params(request: &FetchRequest) -> QueryParams {
    QueryParams {
        page: request.page,
        limit: request.page_size,
        search: request.search.clone(),
        types: request.type_ids().into_iter().map(str::to_string).collect(),
    }
}

/// Every engine failure collapses into `ServerUnavailable`.
pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { request_id, result } => Msg::FetchCompleted {
            seq: request_id,
            result: result
                .map(|page| QuestionPage {
                    items: page
                        .questions
                        .into_iter()
                        .map(|question| Record {
                            title: question.title,
                            type_id: question.kind,
                        })
                        .collect(),
                    total: page.total,
                })
                .map_err(|_| ErrorKind::ServerUnavailable),
        },
    }
}
