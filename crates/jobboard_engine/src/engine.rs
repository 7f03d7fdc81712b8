use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use board_logging::{board_debug, board_error};
use jobboard_core::{QueryKey, RequestId};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, JobsFetcher, ReqwestJobsFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

/// Receives engine events on the engine's runtime threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        query: QueryKey,
    },
}

/// Runs fetches on a background tokio runtime.
///
/// A new fetch cancels the one still in flight; the cancelled request is
/// reported with [`FailureKind::Cancelled`]. Dropping the handle stops the
/// runtime thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let fetcher = ReqwestJobsFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher), sink)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn JobsFetcher>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("jobboard-engine".to_string())
            .spawn(move || {
                let mut in_flight: Option<CancellationToken> = None;
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::Fetch { request_id, query } => {
                            if let Some(previous) = in_flight.take() {
                                previous.cancel();
                            }
                            let token = CancellationToken::new();
                            in_flight = Some(token.clone());
                            let fetcher = fetcher.clone();
                            let sink = sink.clone();
                            runtime.spawn(async move {
                                run_fetch(fetcher.as_ref(), request_id, query, token, sink.as_ref())
                                    .await;
                            });
                        }
                    }
                }
                board_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request_id: RequestId, query: QueryKey) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch { request_id, query })
            .is_err()
        {
            board_error!("engine thread is gone; dropping request_id={}", request_id);
        }
    }
}

async fn run_fetch(
    fetcher: &dyn JobsFetcher,
    request_id: RequestId,
    query: QueryKey,
    token: CancellationToken,
    sink: &dyn EventSink,
) {
    let result = tokio::select! {
        _ = token.cancelled() => Err(FetchError::new(FailureKind::Cancelled, "superseded")),
        result = fetcher.fetch(&query) => result,
    };
    if let Err(err) = &result {
        board_debug!("request_id={} failed: {}", request_id, err);
    }
    sink.emit(EngineEvent::FetchCompleted { request_id, result });
}
