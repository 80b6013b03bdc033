use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use browser_logging::{browser_debug, browser_warn};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, QueryParams, RequestId};

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        params: QueryParams,
    },
}

/// Runs fetches on a background tokio runtime.
///
/// Every command is spawned as its own task, so completions may arrive in
/// any order. Superseded requests are never cancelled; callers decide which
/// completions still matter.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        let fetcher = ReqwestFetcher::new(settings).map_err(io::Error::other)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("browser-engine")
            .build()?;

        thread::Builder::new()
            .name("browser-engine-commands".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                browser_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request_id: RequestId, params: QueryParams) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch { request_id, params })
            .is_err()
        {
            browser_warn!("Engine stopped; dropping request #{}", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, params } => {
            let result = fetcher.fetch(&params).await;
            if let Err(err) = &result {
                browser_warn!("Request #{} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
